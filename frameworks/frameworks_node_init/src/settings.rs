//! Settings Module
//!
//! Node settings are string maps keyed by the dashed option name (`-listen`).
//! Each key has a single effective value (the first one seen) plus the list of
//! every value given, for options that may repeat (`-connect`, `-addnode`).
//!
//! Sources, strongest first:
//! 1. command line (`-name[=value]`, `--name` is accepted as `-name`)
//! 2. config file (`name=value` lines, `#` starts a comment)
//! 3. soft defaults installed with [`Settings::soft_set_arg`]
//!
//! `-nofoo` is read as `-foo=0` unless `-foo` is given explicitly.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::InitError;

/// Parsed node settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    args: HashMap<String, String>,
    multi_args: HashMap<String, Vec<String>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse command-line style parameters.
    ///
    /// Parsing stops at the first parameter that does not start with `-`.
    /// Later duplicates replace the single value and extend the multi list.
    pub fn parse_parameters<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::new();
        for param in params {
            let param = param.as_ref().trim();
            if !param.starts_with('-') {
                break;
            }
            let (key, value) = split_setting(param);
            settings.set(&normalize_key(key), value);
        }

        let negated: Vec<String> = settings.args.keys().cloned().collect();
        for key in negated {
            settings.interpret_negative(&key);
        }
        settings
    }

    /// Merge a config file. A missing file is not an error.
    ///
    /// Values already set on the command line win; every value is still
    /// appended to the multi list.
    pub fn read_config_file(&mut self, path: &Path) -> Result<(), InitError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(());
            }
            Err(source) => {
                return Err(InitError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let mut merged = 0usize;
        for line in contents.lines() {
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }
            let (name, value) = split_setting(line);
            let key = format!("-{}", name.trim().trim_start_matches('-'));
            let value = value.trim();
            if !self.args.contains_key(&key) {
                self.args.insert(key.clone(), value.to_string());
                self.interpret_negative(&key);
            }
            self.multi_args.entry(key).or_default().push(value.to_string());
            merged += 1;
        }
        debug!(path = %path.display(), merged, "read config file");
        Ok(())
    }

    /// Set a value as if given on the command line
    pub fn set(&mut self, key: &str, value: &str) {
        self.args.insert(key.to_string(), value.to_string());
        self.multi_args
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.args.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Every value given for `key`, in order
    pub fn get_multi(&self, key: &str) -> &[String] {
        self.multi_args.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_arg(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Integer value with C `atoi` leniency: leading digits only, 0 when none
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(value) => atoi64(value),
            None => default,
        }
    }

    /// Boolean value. An empty value (`-foo`) means true.
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some("") => true,
            Some(value) => atoi64(value) != 0,
            None => default,
        }
    }

    /// Set `key` unless it already has a value. Returns whether it was set.
    pub fn soft_set_arg(&mut self, key: &str, value: &str) -> bool {
        if self.is_set(key) {
            return false;
        }
        self.args.insert(key.to_string(), value.to_string());
        true
    }

    pub fn soft_set_bool_arg(&mut self, key: &str, value: bool) -> bool {
        self.soft_set_arg(key, if value { "1" } else { "0" })
    }

    fn interpret_negative(&mut self, key: &str) {
        let Some(name) = key.strip_prefix("-no") else {
            return;
        };
        if name.is_empty() {
            return;
        }
        let positive = format!("-{}", name);
        if !self.is_set(&positive) {
            let value = !self.get_bool_arg(key, false);
            self.args
                .insert(positive, if value { "1" } else { "0" }.to_string());
        }
    }
}

fn split_setting(param: &str) -> (&str, &str) {
    match param.split_once('=') {
        Some((key, value)) => (key, value),
        None => (param, ""),
    }
}

fn normalize_key(key: &str) -> String {
    match key.strip_prefix("--") {
        Some(rest) => format!("-{}", rest),
        None => key.to_string(),
    }
}

fn atoi64(value: &str) -> i64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        result = result
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if negative {
        -result
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_parameters() {
        let settings = Settings::parse_parameters(["-a=1", "--b=two", "-c", "-a=3"]);
        assert_eq!(settings.get("-a"), Some("3"));
        assert_eq!(settings.get("-b"), Some("two"));
        assert_eq!(settings.get("-c"), Some(""));
        assert_eq!(settings.get_multi("-a"), &["1".to_string(), "3".to_string()]);
        assert!(settings.get_multi("-missing").is_empty());
    }

    #[test]
    fn test_parse_stops_at_non_option() {
        let settings = Settings::parse_parameters(["-a", "stray", "-b"]);
        assert!(settings.is_set("-a"));
        assert!(!settings.is_set("-b"));
    }

    #[test]
    fn test_negative_settings() {
        let settings = Settings::parse_parameters(["-nolisten"]);
        assert!(!settings.get_bool_arg("-listen", true));

        let settings = Settings::parse_parameters(["-nolisten=0"]);
        assert!(settings.get_bool_arg("-listen", false));

        let settings = Settings::parse_parameters(["-nolisten", "-listen=1"]);
        assert!(settings.get_bool_arg("-listen", false));
    }

    #[test]
    fn test_bool_and_int_values() {
        let settings = Settings::parse_parameters(["-a", "-b=0", "-c=12abc", "-d=junk", "-e=-7"]);
        assert!(settings.get_bool_arg("-a", false));
        assert!(!settings.get_bool_arg("-b", true));
        assert!(settings.get_bool_arg("-c", false));
        assert!(!settings.get_bool_arg("-d", true));
        assert!(settings.get_bool_arg("-missing", true));
        assert_eq!(settings.get_int_arg("-c", 0), 12);
        assert_eq!(settings.get_int_arg("-e", 0), -7);
        assert_eq!(settings.get_int_arg("-missing", 42), 42);
        assert_eq!(settings.get_arg("-missing", "dflt"), "dflt");
    }

    #[test]
    fn test_soft_set() {
        let mut settings = Settings::parse_parameters(["-listen=0"]);
        assert!(!settings.soft_set_bool_arg("-listen", true));
        assert_eq!(settings.get("-listen"), Some("0"));
        assert!(settings.soft_set_bool_arg("-upnp", false));
        assert_eq!(settings.get("-upnp"), Some("0"));
        assert!(!settings.soft_set_arg("-upnp", "1"));
    }

    #[test]
    fn test_config_file_merge() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file, "rpcport=9000").unwrap();
        writeln!(file, "addnode=a  # inline").unwrap();
        writeln!(file, "addnode=b").unwrap();
        writeln!(file, "nodnsseed=1").unwrap();
        writeln!(file).unwrap();

        let mut settings = Settings::parse_parameters(["-rpcport=8000"]);
        settings.read_config_file(file.path()).unwrap();

        assert_eq!(settings.get("-rpcport"), Some("8000"));
        assert_eq!(
            settings.get_multi("-rpcport"),
            &["8000".to_string(), "9000".to_string()]
        );
        assert_eq!(settings.get("-addnode"), Some("a"));
        assert_eq!(settings.get_multi("-addnode").len(), 2);
        assert!(!settings.get_bool_arg("-dnsseed", true));
    }

    #[test]
    fn test_missing_config_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new();
        settings
            .read_config_file(&dir.path().join("absent.conf"))
            .unwrap();
        assert_eq!(settings, Settings::new());
    }
}
