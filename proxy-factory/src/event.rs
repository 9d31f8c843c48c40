use std::str::FromStr;

use steel::Pubkey;

/// Log prefix of the clone creation event.
pub const PROXY_CREATED: &str = "ProxyCreated";

/// Emitted as a program log line once a clone is created and initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProxyCreated {
    pub proxy: Pubkey,
    pub logic: Pubkey,
}

impl ProxyCreated {
    pub fn to_log(&self) -> String {
        format!("{} {} {}", PROXY_CREATED, self.proxy, self.logic)
    }

    /// Parses a transaction log line, with or without the runtime's
    /// `Program log: ` prefix.
    pub fn from_log(line: &str) -> Option<Self> {
        let line = line.strip_prefix("Program log: ").unwrap_or(line);
        let mut parts = line.split_whitespace();
        if parts.next()? != PROXY_CREATED {
            return None;
        }
        let proxy = Pubkey::from_str(parts.next()?).ok()?;
        let logic = Pubkey::from_str(parts.next()?).ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { proxy, logic })
    }

    /// First creation event in a transaction's logs.
    pub fn find<S: AsRef<str>>(logs: &[S]) -> Option<Self> {
        logs.iter().find_map(|line| Self::from_log(line.as_ref()))
    }
}
