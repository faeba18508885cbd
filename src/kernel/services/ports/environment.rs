//! Host environment contract used by identifier completion and quick-info.

/// Read access to environment variables. Implementations must read fresh state on each call.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;

    fn vars(&self) -> Vec<(String, String)>;

    /// Substitutes every defined `%NAME%` reference; undefined references stay verbatim.
    fn expand(&self, text: &str) -> String {
        expand_references(text, |name| self.var(name))
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn vars(&self) -> Vec<(String, String)> {
        (**self).vars()
    }

    fn expand(&self, text: &str) -> String {
        (**self).expand(text)
    }
}

pub fn expand_references(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('%') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('%') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after_open[..close];
        match (!name.is_empty()).then(|| lookup(name)).flatten() {
            Some(value) => {
                out.push_str(&value);
                rest = &after_open[close + 1..];
            }
            None => {
                // The closing `%` may open the next reference.
                out.push('%');
                out.push_str(name);
                rest = &after_open[close..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/environment.rs"]
mod tests;
