//! Parsing of git remote URLs

use url::Url;

/// Picks the URL of the first remote from `git remote -v` output
pub fn parse_remote_list(output: &str) -> Option<String> {
    let line = output.lines().find(|line| !line.trim().is_empty())?;
    line.split_whitespace().nth(1).map(str::to_string)
}

/// Host of a remote URL, without user or port.
///
/// Accepts `scheme://[user@]host[:port]/path` and the scp-like
/// `[user@]host:path` form.
pub fn remote_host(remote: &str) -> Option<String> {
    let remote = remote.trim();

    if remote.contains("://") {
        let url = Url::parse(remote).ok()?;
        return url.host_str().map(str::to_string);
    }

    let (authority, _) = remote.split_once(':')?;
    let host = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    if host.is_empty() || host.contains('/') {
        return None;
    }
    Some(host.to_string())
}
