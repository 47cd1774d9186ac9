//! Shared test utilities for clipmock
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::Cursor;

    use crate::clipboard::{ClipboardMock, ClipboardProvider};
    use crate::config::AliasPolicy;
    use crate::host::{HostStats, PluginHost, Session};

    /// Mock with the default `"` -> `*` alias
    pub fn star_mock() -> ClipboardMock {
        ClipboardMock::new(AliasPolicy::Star)
    }

    /// Helper to build an owned line list
    pub fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Runs a host over `input` and returns what it wrote back
    pub fn host_output<P: ClipboardProvider>(
        provider: P,
        input: impl AsRef<[u8]>,
    ) -> (HostStats, String) {
        let mut host = PluginHost::new(provider);
        let mut session = Session::new(Cursor::new(input.as_ref().to_vec()), Vec::new());
        let stats = host.run(&mut session).unwrap();
        let output = String::from_utf8(session.into_writer()).unwrap();
        (stats, output)
    }
}
