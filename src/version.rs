use anyhow::{Context, Result};
use regex::Regex;
use semver::{Version, VersionReq};

/// Extract the declared version specifier from a manifest source reference.
///
/// The specifier lives in the URL fragment, optionally behind a `semver:`
/// marker:
///
/// - `git+ssh://git@host/team/widget.git#semver:^1.2.0` → `^1.2.0`
/// - `git+ssh://git@host/team/widget.git#v1.2.0` → `v1.2.0`
/// - `git+ssh://git@host/team/widget.git` → `` (empty specifier)
///
/// This is a pure function of the source reference string; only the first
/// `#` starts the fragment.
pub fn declared_spec(source: &str) -> String {
    let fragment = match source.split_once('#') {
        Some((_, frag)) => frag,
        None => "",
    };
    let marker = Regex::new(r"^semver:").unwrap();
    marker.replace(fragment, "").into_owned()
}

/// Parse a declared specifier into a semver range.
///
/// The empty specifier (a source reference without a fragment) is the
/// wildcard range and matches any release version. A non-empty specifier
/// that is not valid range syntax is an error naming the dependency: the
/// manifest is misdeclared and the run cannot produce a meaningful verdict.
pub fn spec_range(name: &str, spec: &str) -> Result<VersionReq> {
    if spec.is_empty() {
        return Ok(VersionReq::STAR);
    }
    VersionReq::parse(spec).with_context(|| format!("{}: invalid version range {:?}", name, spec))
}

/// Decide whether a `git describe --dirty` output satisfies the range.
///
/// Output that is not a parseable semantic version (for example the raw
/// commit hash describe falls back to without a reachable tag) never
/// matches; it is not an error. A single leading `v` is tolerated, the way
/// release tags are usually named. Distance and dirty suffixes
/// (`v1.2.0-3-gabc1234`, `v1.2.0-dirty`) parse as prerelease versions and
/// therefore fail plain ranges, which is exactly the drift this tool is
/// looking for.
pub fn tag_matches(range: &VersionReq, actual: &str) -> bool {
    let bare = actual.strip_prefix('v').unwrap_or(actual);
    match Version::parse(bare) {
        Ok(version) => range.matches(&version),
        Err(_) => false,
    }
}
