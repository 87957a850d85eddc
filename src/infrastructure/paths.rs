//! Path utilities for the Zellij sandbox environment.
//!
//! In Zellij's plugin sandbox the host filesystem is mounted under `/host`,
//! pointing at the cwd of the last focused terminal (or the folder Zellij was
//! started from). The plugin only touches the filesystem for its log file,
//! which lives in the data directory below.

use std::path::PathBuf;

/// Returns the data directory for zhelf.
///
/// The directory is located at `/host/.local/share/zellij/zhelf` in the
/// Zellij sandbox, which typically resolves to
/// `~/.local/share/zellij/zhelf` when Zellij is started from a home
/// directory terminal. The log file is located within this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zhelf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_sandbox_mount() {
        let dir = data_dir();
        assert!(dir.starts_with("/host"));
        assert!(dir.ends_with("zhelf"));
    }
}
