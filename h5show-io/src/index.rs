//! Dataset index: locate the frames of an HDF5 file.

use hdf5::{Group, LinkType, LocationToken, LocationType};
use h5show_core::{FrameList, FrameRef, FrameShape};
use log::{info, warn};

use crate::{Error, Result};

/// Groups nested deeper than this are not descended.
const MAX_GROUP_DEPTH: usize = 64;

/// Index a fixed-layout file whose frames are the leading axis of `dataset`.
///
/// # Errors
/// Returns an error if the dataset is missing, is not 3D, or has no frames.
pub fn index_stack(root: &Group, dataset: &str) -> Result<FrameList> {
    let ds = root.dataset(dataset)?;
    let shape = ds.shape();
    let [count, rows, cols] = shape[..] else {
        return Err(Error::InvalidFormat(format!(
            "{dataset}: expected a 3D frame stack, found shape {shape:?}"
        )));
    };
    let frames = FrameList::slabs(count, FrameShape::new(rows, cols))?;
    info!("{dataset}: {count} frames of {rows}x{cols}");
    Ok(frames)
}

/// Index every 2D dataset whose stored shape is exactly `[x, y]`.
///
/// Groups are descended recursively through hard links only; soft and
/// external links are not followed and an object reachable under several
/// hard links is recorded once. Matching paths are sorted lexicographically
/// so frame numbering does not depend on file internals.
///
/// # Errors
/// Returns an error if the root group cannot be read or nothing matches.
pub fn discover_frames(root: &Group, x: usize, y: usize) -> Result<FrameList> {
    let mut walk = Walk {
        target: [x, y],
        shared: Vec::new(),
        paths: Vec::new(),
    };
    walk.visit(root, &root.name(), 0)?;
    let mut paths = walk.paths;
    paths.sort_unstable();

    if paths.is_empty() {
        return Err(Error::NoMatchingFrames { x, y });
    }
    info!("found {} datasets of shape {x}x{y}", paths.len());

    let frames = paths.into_iter().map(FrameRef::Dataset).collect();
    Ok(FrameList::new(frames, FrameShape::new(x, y))?)
}

/// State of one discovery walk.
struct Walk {
    target: [usize; 2],
    /// Objects with more than one hard link that were already visited.
    shared: Vec<LocationToken>,
    paths: Vec<String>,
}

impl Walk {
    fn visit(&mut self, group: &Group, prefix: &str, depth: usize) -> Result<()> {
        let mut links = group.iter_visit_default(Vec::new(), |_, name, link, links| {
            links.push((name.to_owned(), link.link_type));
            true
        })?;
        links.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (name, link_type) in links {
            if link_type != LinkType::Hard {
                continue;
            }
            let info = match group.loc_info_by_name(&name) {
                Ok(info) => info,
                Err(e) => {
                    warn!("skipping {}: {e}", join_path(prefix, &name));
                    continue;
                }
            };
            if info.num_links > 1 {
                if self.shared.contains(&info.token) {
                    continue;
                }
                self.shared.push(info.token);
            }

            let path = join_path(prefix, &name);
            match info.loc_type {
                LocationType::Dataset => match group.dataset(&name) {
                    Ok(dataset) => {
                        if dataset.shape() == self.target {
                            self.paths.push(path);
                        }
                    }
                    Err(e) => warn!("skipping {path}: {e}"),
                },
                LocationType::Group => {
                    if depth >= MAX_GROUP_DEPTH {
                        warn!("{path}: not descending past depth {depth}");
                        continue;
                    }
                    let descended = group
                        .group(&name)
                        .map_err(Error::from)
                        .and_then(|child| self.visit(&child, &path, depth + 1));
                    if let Err(e) = descended {
                        warn!("skipping {path}: {e}");
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.ends_with('/') {
        format!("{prefix}{name}")
    } else {
        format!("{prefix}/{name}")
    }
}
