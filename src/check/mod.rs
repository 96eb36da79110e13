mod jobs;
mod progress;
mod report;

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar};
use rayon::prelude::*;
use std::path::Path;
use std::time::Duration;

use crate::git::describe_dirty;
use crate::manifest::{load_manifest, merge_dependency_groups};
use crate::paths::project_paths;
use crate::scan::linked_entries;
use crate::version::{declared_spec, spec_range, tag_matches};

use jobs::{CheckJob, build_jobs};
use progress::styles;

/// Overall verdict of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every evaluated dependency matched, or there was nothing to check.
    Clean,
    /// At least one linked dependency is out of sync with its declaration.
    Mismatch,
}

/// One linked dependency with its declared and actual tags resolved.
///
/// `spec_tag` is derived from the manifest's source reference fragment,
/// `actual_tag` is the verbatim (trailing-whitespace-trimmed) output of
/// `git describe --dirty` in the linked checkout, and `matches` is the
/// range predicate over the two.
#[derive(Debug, Clone)]
pub struct ResolvedDependency {
    pub name: String,
    pub spec_tag: String,
    pub actual_tag: String,
    pub matches: bool,
}

/// Check every linked dependency under `root`.
///
/// High-level flow:
/// 1. Scan `node_modules` for symlinked entries.
/// 2. Load `package.json` and merge the two declaration groups
///    (`devDependencies` wins on collision).
/// 3. Build one job per name present in both sets (see [`jobs::build_jobs`]).
/// 4. Resolve all jobs **in parallel** with progress spinners: extract the
///    declared specifier from the source reference and run
///    `git describe --dirty` in the linked checkout.
/// 5. Print one report line per dependency and return the overall outcome.
///
/// Progress reporting uses `indicatif::MultiProgress`; each job gets its own
/// spinner. Unlike the spinners, the report itself is written with plain
/// `println!` once every result is in.
///
/// Any resolution failure aborts the run after the parallel phase; there is
/// no partial report.
///
/// # Errors
/// Returns an error if the dependency directory or manifest cannot be read,
/// if a declared specifier is not valid range syntax, or if `git describe`
/// fails for any linked checkout.
pub fn cmd_check(root: &Path) -> Result<CheckOutcome> {
    println!("Checking linked dependencies versions...");

    let p = project_paths(root);
    let symlinks = linked_entries(&p.modules)?;
    let manifest = load_manifest(&p.manifest)?;
    let deps = merge_dependency_groups(&manifest.dependencies, &manifest.dev_dependencies);

    let jobs = build_jobs(&symlinks, &deps, &p);
    if jobs.is_empty() {
        println!("{}", report::render_nothing_to_check());
        return Ok(CheckOutcome::Clean);
    }

    let resolved = resolve_all(&jobs)?;

    let mut all_match = true;
    for dep in &resolved {
        println!("{}", report::render_line(dep));
        all_match &= dep.matches;
    }

    Ok(if all_match {
        CheckOutcome::Clean
    } else {
        CheckOutcome::Mismatch
    })
}

/// Resolve declared and actual tags for every job, in parallel.
///
/// Results come back in job order; completion order is irrelevant because
/// nothing is reported until the whole set is in. The first failed job
/// aborts the run once the parallel phase has drained.
fn resolve_all(jobs: &[CheckJob]) -> Result<Vec<ResolvedDependency>> {
    let mp = MultiProgress::new();
    let st = styles();

    let mut bars: Vec<ProgressBar> = Vec::with_capacity(jobs.len());
    for j in jobs {
        let pb = mp.add(ProgressBar::new_spinner());
        pb.set_style(st.run.clone());
        pb.set_message(format!("describing {}", j.name));
        pb.enable_steady_tick(Duration::from_millis(80));
        bars.push(pb);
    }

    let results: Vec<Result<ResolvedDependency>> = jobs
        .par_iter()
        .enumerate()
        .map(|(idx, job)| {
            let pb = &bars[idx];
            let res = resolve_one(job);
            match &res {
                Ok(dep) => {
                    pb.set_style(st.ok.clone());
                    pb.finish_with_message(format!("described {} ({})", dep.name, dep.actual_tag));
                }
                Err(e) => {
                    pb.set_style(st.fail.clone());
                    pb.finish_with_message(format!("describing {} (error: {})", job.name, e));
                }
            }
            res
        })
        .collect();

    results.into_iter().collect()
}

/// Resolve a single job into a [`ResolvedDependency`].
fn resolve_one(job: &CheckJob) -> Result<ResolvedDependency> {
    let spec_tag = declared_spec(&job.source);
    let range = spec_range(&job.name, &spec_tag)?;
    let actual_tag = describe_dirty(&job.dir)?;
    let matches = tag_matches(&range, &actual_tag);
    Ok(ResolvedDependency {
        name: job.name.clone(),
        spec_tag,
        actual_tag,
        matches,
    })
}
