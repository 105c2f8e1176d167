use serde::{Deserialize, Serialize};

/// Operating system information, normalized from [`UserAgent::os`].
///
/// [`UserAgent::os`]: super::UserAgent::os
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OsInfo {
    /// Full name of the operating system, identical to [`UserAgent::os`].
    ///
    /// [`UserAgent::os`]: super::UserAgent::os
    pub full_name: String,
    /// Name of the operating system, e.g. `Mac OS X` for `Intel Mac OS X 10_8_2`.
    pub name: String,
    /// Version of the operating system, e.g. `10.8.2` for `Intel Mac OS X 10_8_2`.
    pub version: String,
}

impl OsInfo {
    /// Split the full name of an operating system into its name and version.
    ///
    /// ```
    /// use agentsniff_ua::OsInfo;
    ///
    /// let info = OsInfo::from_full_name("CPU iPhone OS 7_0 like Mac OS X");
    /// assert_eq!(info.name, "iPhone OS");
    /// assert_eq!(info.version, "7.0");
    /// ```
    #[must_use]
    pub fn from_full_name(full_name: &str) -> Self {
        // iOS wraps its name in "CPU ... like Mac OS X"
        let os = full_name
            .replacen("like Mac OS X", "", 1)
            .replacen("CPU", "", 1);
        let os = os.trim_matches(' ');

        let mut parts: Vec<&str> = os.split(' ').collect();
        if os == "Windows XP x64 Edition" {
            parts.truncate(parts.len().saturating_sub(2));
        }

        let (name, version) = os_name(&parts);
        let (name, version) = match name.split_once('/') {
            Some((name, rest)) => (
                name.to_owned(),
                rest.split('/').next().unwrap_or_default().replace('_', "."),
            ),
            None => (name, version.replace('_', ".")),
        };

        Self {
            full_name: full_name.to_owned(),
            name,
            version,
        }
    }
}

/// Name and version, with the version assumed to be the last part.
fn os_name<'a>(parts: &[&'a str]) -> (String, &'a str) {
    let [name_parts @ .., version] = parts else {
        return (String::new(), "");
    };
    let version = *version;
    if name_parts.is_empty() {
        return (version.to_owned(), "");
    }

    let name_parts = match name_parts {
        ["Intel", rest @ ..] if rest.first() == Some(&"Mac") => rest,
        _ => name_parts,
    };
    let name = name_parts.join(" ");

    // architectures are no versions
    if version.contains("x86") || version.contains("i686") {
        (name, "")
    } else if version == "X" && name == "Mac OS" {
        ("Mac OS X".to_owned(), "")
    } else {
        (name, version)
    }
}
