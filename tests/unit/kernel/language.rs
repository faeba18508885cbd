use crate::kernel::language::LanguageId;
use std::path::Path;

#[test]
fn from_path_maps_batch_extensions() {
    let cases = [
        ("build.bat", Some(LanguageId::Batch)),
        ("build.cmd", Some(LanguageId::Batch)),
        ("BUILD.BAT", Some(LanguageId::Batch)),
        ("setup.Cmd", Some(LanguageId::Batch)),
        ("script.ps1", None),
        ("script.sh", None),
        ("Makefile", None),
    ];

    for (path, expected) in cases {
        assert_eq!(LanguageId::from_path(Path::new(path)), expected, "{path}");
    }
}

#[test]
fn batch_metadata() {
    let lang = LanguageId::Batch;
    assert_eq!(lang.language_id(), "bat");
    assert_eq!(lang.display_name(), "Batch");
    assert_eq!(lang.extensions(), &["bat", "cmd"]);
}
