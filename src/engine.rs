use crate::utils::*;
use crate::{Policy, Region, Request};

/// Drives one simulation pass: every request in `requests` is resolved
/// against `regions` under `policy`, in batch order, exactly once.
///
/// A request that fails placement stays pending and is never retried.
/// Regions never free up within a run, so a second pass could not
/// change the outcome anyway.
///
/// The returned log holds one `"<start> <cursor> <id>"` line per
/// placement in the order placements occurred, followed by one
/// `"-<id>"` line per pending request in original relative order. When
/// nothing was left pending the failure lines are replaced by a single
/// `"-0"`. An empty batch thus produces exactly one line: `"-0"`.
pub fn run(policy: Policy, requests: Vec<Request>, mut regions: Vec<Region>) -> Vec<String> {
    let mut log = Vec::with_capacity(requests.len() + 1);
    let mut pending: Vec<Request> = vec![];

    for request in requests {
        match policy.choose(request, &regions) {
            Some(idx) => {
                let slot = &mut regions[idx];
                slot.place(request);
                log.push(format!(
                    "{} {} {}",
                    slot.last_placement_start(),
                    slot.cursor(),
                    request.id
                ));
            }
            None => pending.push(request),
        }
    }

    if pending.is_empty() {
        log.push(String::from("-0"));
    } else {
        for request in &pending {
            log.push(format!("-{}", request.id));
        }
    }

    log
}

/// Runs every requested policy over the same nominal input and collects
/// the per-policy logs, in the order the policies were given.
///
/// Each run operates on its own copy of the region list and request
/// batch, so mutation by one policy never leaks into another and the
/// order of the runs is irrelevant.
pub fn simulate(
    policies: &[Policy],
    regions: &[Region],
    requests: &[Request],
) -> Vec<(Policy, Vec<String>)> {
    policies
        .iter()
        .map(|&policy| (policy, run(policy, requests.to_vec(), regions.to_vec())))
        .collect()
}
