//! Batch command vocabulary: keyword name -> short description.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pub name: &'static str,
    pub description: &'static str,
}

const fn kw(name: &'static str, description: &'static str) -> KeywordEntry {
    KeywordEntry { name, description }
}

/// Names are lowercase and unique.
pub const KEYWORDS: &[KeywordEntry] = &[
    kw("call", "Calls one batch program from another."),
    kw("comp", "Compares the contents of two files or sets of files."),
    kw("compact", "Displays or alters the compression of files on NTFS partitions."),
    kw("convert", "Converts FAT volumes to NTFS.  You cannot convert the current drive."),
    kw("copy", "Copies one or more files to another location."),
    kw("date", "Displays or sets the date."),
    kw("define", "Define."),
    kw("del", "Deletes one or more files."),
    kw("dir", "Displays a list of files and subdirectories in a directory."),
    kw("diskcomp", "Compares the contents of two floppy disks."),
    kw("diskcopy", "Copies the contents of one floppy disk to another."),
    kw("diskpart", "Displays or configures Disk Partition properties."),
    kw("do", "Used with for to name the command run for each item."),
    kw("doskey", "Edits command lines, recalls Windows commands, and creates macros."),
    kw("driverquery", "Displays current device driver status and properties."),
    kw("echo", "Displays messages, or turns command echoing on or off."),
    kw("endlocal", "Ends localization of environment changes in a batch file."),
    kw("erase", "Deletes one or more files."),
    kw("exist", "Used with if to test whether a file or folder exists."),
    kw("exit", "Quits the CMD.EXE program (command interpreter)."),
    kw("fc", "Compares two files or sets of files, and displays the differences between them."),
    kw("find", "Searches for a text string in a file or files."),
    kw("findstr", "Searches for strings in files."),
    kw("for", "Runs a specified command for each file in a set of files."),
    kw("format", "Formats a disk for use with Windows."),
    kw("fsutil", "Displays or configures the file system properties."),
    kw("ftype", "Displays or modifies file types used in file extension associations."),
    kw("goto", "Directs the Windows command interpreter to a labeled line in a batch program."),
    kw("gpresult", "Displays Group Policy information for machine or user."),
    kw("graftabl", "Enables Windows to display an extended character set in graphics mode."),
    kw("help", "Provides Help information for Windows commands."),
    kw("icacls", "Display, modify, backup, or restore ACLs for files and directories."),
    kw("if", "Performs conditional processing in batch programs."),
    kw("in", "Used with for to list the set of items to iterate."),
    kw("label", "Creates, changes, or deletes the volume label of a disk."),
    kw("md", "Creates a directory."),
    kw("mkdir", "Creates a directory."),
    kw("mklink", "Creates Symbolic Links and Hard Links"),
    kw("mode", "Configures a system device."),
    kw("more", "Displays output one screen at a time."),
    kw("move", "Moves one or more files from one directory to another directory."),
    kw("net", "Manages network resources, users, services and shares."),
    kw("not", "Used with if to negate the condition."),
    kw("nul", "The null device; output redirected to it is discarded."),
    kw("openfiles", "Displays files opened by remote users for a file share."),
    kw("path", "Displays or sets a search path for executable files."),
    kw("pause", "Suspends processing of a batch file and displays a message."),
    kw("popd", "Restores the previous value of the current directory saved by PUSHD."),
    kw("print", "Prints a text file."),
    kw("prompt", "Changes the Windows command prompt."),
    kw("pushd", "Saves the current directory then changes it."),
    kw("rd", "Removes a directory."),
    kw("recover", "Recovers readable information from a bad or defective disk."),
    kw("rem", "Records comments (remarks) in batch files or CONFIG.SYS."),
    kw("ren", "Renames a file or files."),
    kw("rename", "Renames a file or files."),
    kw("replace", "Replaces files."),
    kw("rmdir", "Removes a directory."),
    kw("robocopy", "Advanced utility to copy files and directory trees."),
    kw("sc", "Displays or configures services (background processes)."),
    kw("schtasks", "Schedules commands and programs to run on a computer."),
    kw("set", "Displays, sets, or removes Windows environment variables."),
    kw("setlocal", "Begins localization of environment changes in a batch file."),
    kw("shift", "Shifts the position of replaceable parameters in batch files."),
    kw("shutdown", "Allows proper local or remote shutdown of machine."),
    kw("sort", "Sorts input."),
    kw("start", "Starts a separate window to run a specified program or command."),
    kw("subst", "Associates a path with a drive letter."),
    kw("systeminfo", "Displays machine specific properties and configuration."),
    kw("taskkill", "Kill or stop a running process or application."),
    kw("tasklist", "Displays all currently running tasks including services."),
    kw("time", "Displays or sets the system time."),
    kw("title", "Sets the window title for a CMD.EXE session."),
    kw("tree", "Graphically displays the directory structure of a drive or path."),
    kw("type", "Displays the contents of a text file."),
    kw("ver", "Displays the Windows version."),
    kw("verify", "Tells Windows whether to verify that your files are written correctly to a disk."),
    kw("vol", "Displays a disk volume label and serial number."),
    kw("wmic", "Displays WMI information inside interactive command shell."),
    kw("xcopy", "Copies files and directory trees."),
];

static TABLE: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
});

/// Case-insensitive description lookup.
pub fn lookup(name: &str) -> Option<&'static str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        TABLE.get(name.to_ascii_lowercase().as_str()).copied()
    } else {
        TABLE.get(name).copied()
    }
}

pub fn is_keyword(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn all_names() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|entry| entry.name)
}

pub fn entries() -> &'static [KeywordEntry] {
    KEYWORDS
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/batch/keywords.rs"]
mod tests;
