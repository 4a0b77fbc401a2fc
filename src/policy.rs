use crate::{Region, Request};
use clap::ValueEnum;

/// The closed set of placement heuristics.
///
/// Each variant is a stateless selection rule over the full region
/// list: a region qualifies iff the request fits in its available
/// space, and ties on available space are always broken in favor of
/// the first qualifying region encountered. Given the same region list
/// order and the same request, the chosen region is therefore always
/// the same.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum Policy {
    /// First fit: first qualifying region in list order
    #[value(name = "FF")]
    Ff,
    /// Best fit: qualifying region with the least available space
    #[value(name = "BF")]
    Bf,
    /// Worst fit: qualifying region with the most available space
    #[value(name = "WF")]
    Wf,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Ff => write!(f, "FF"),
            Policy::Bf => write!(f, "BF"),
            Policy::Wf => write!(f, "WF"),
        }
    }
}

impl Policy {
    /// Selects the region that shall service `request`, or `None` if no
    /// region has enough space. Pure: the winner's index is returned
    /// and the caller performs the actual placement.
    pub fn choose(&self, request: Request, regions: &[Region]) -> Option<usize> {
        match self {
            Policy::Ff => regions
                .iter()
                .position(|slot| request.size <= slot.available_space()),
            // Best/worst fit scan the whole list and replace their
            // running winner only on a *strictly* smaller/larger
            // available space, so the first region wins exact ties.
            Policy::Bf => {
                let mut best: Option<usize> = None;
                for (idx, slot) in regions.iter().enumerate() {
                    if request.size > slot.available_space() {
                        continue;
                    }
                    match best {
                        Some(b) if slot.available_space() < regions[b].available_space() => {
                            best = Some(idx);
                        }
                        Some(_) => {}
                        None => best = Some(idx),
                    }
                }
                best
            }
            Policy::Wf => {
                let mut worst: Option<usize> = None;
                for (idx, slot) in regions.iter().enumerate() {
                    if request.size > slot.available_space() {
                        continue;
                    }
                    match worst {
                        Some(w) if slot.available_space() > regions[w].available_space() => {
                            worst = Some(idx);
                        }
                        Some(_) => {}
                        None => worst = Some(idx),
                    }
                }
                worst
            }
        }
    }
}
