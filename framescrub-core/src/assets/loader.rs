use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    assets::{
        decode::decode_frame,
        frame_set::{FrameSet, FrameSetBuilder, LoadProgress, PreparedFrame},
        naming::FramePathTemplate,
        placeholder::{PlaceholderPainter, PlaceholderStyle},
    },
    device::tier::TierSettings,
    foundation::{
        core::FrameIndex,
        error::{FramescrubError, FramescrubResult},
    },
};

/// Where encoded frame bytes come from.
pub trait FrameSource: Sync {
    /// Fetch the bytes stored at `rel_path` (a `/`-separated path from the naming template).
    fn fetch(&self, rel_path: &str) -> FramescrubResult<Vec<u8>>;
}

/// Frames served from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FrameSource for DirSource {
    fn fetch(&self, rel_path: &str) -> FramescrubResult<Vec<u8>> {
        let path = self.root.join(Path::new(rel_path));
        std::fs::read(&path)
            .with_context(|| format!("read frame bytes from '{}'", path.display()))
            .map_err(FramescrubError::from)
    }
}

/// Frames held in memory, keyed by relative path.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rel_path: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(rel_path.into(), bytes);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FrameSource for MemorySource {
    fn fetch(&self, rel_path: &str) -> FramescrubResult<Vec<u8>> {
        self.files
            .get(rel_path)
            .cloned()
            .ok_or_else(|| FramescrubError::asset(format!("no frame at '{rel_path}'")))
    }
}

/// Overlay-facing status of the frame set.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Frames are still settling.
    Loading(LoadProgress),
    /// Every slot settled; playback may begin.
    Ready(LoadProgress),
    /// The load call itself failed. Scrolling keeps working but nothing is drawn.
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Loader tuning that does not depend on the tier.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoaderOpts {
    /// Override rayon worker threads. `None` sizes the pool to the tier's batch.
    pub threads: Option<usize>,
    pub placeholder: PlaceholderStyle,
}

/// Populates a [`FrameSet`] in batches, substituting placeholders for frames that fail.
#[derive(Debug)]
pub struct FrameLoader {
    template: FramePathTemplate,
    placeholders: PlaceholderPainter,
    threads: Option<usize>,
}

impl FrameLoader {
    pub fn new(template: FramePathTemplate, opts: LoaderOpts) -> FramescrubResult<Self> {
        template.validate()?;
        if opts.threads == Some(0) {
            return Err(FramescrubError::validation(
                "loader 'threads' must be >= 1 when set",
            ));
        }
        Ok(Self {
            template,
            placeholders: PlaceholderPainter::new(opts.placeholder)?,
            threads: opts.threads,
        })
    }

    pub fn template(&self) -> &FramePathTemplate {
        &self.template
    }

    /// Load every frame `settings` asks for.
    ///
    /// Requests run `batch_size` at a time; a batch completes when all of its requests settle.
    /// `on_progress` is called on the calling thread after every settled slot. Individual frame
    /// failures never fail the load.
    ///
    /// The call blocks, including the pause between batches, so run it off the paint thread and
    /// hand the result to [`FrameSequencePlayer::attach_frames`](crate::FrameSequencePlayer::attach_frames).
    #[tracing::instrument(skip_all, fields(tier = settings.tier.as_str(), frames = settings.frame_count))]
    pub fn load<S>(
        &self,
        source: &S,
        settings: &TierSettings,
        mut on_progress: impl FnMut(LoadProgress),
    ) -> FramescrubResult<FrameSet>
    where
        S: FrameSource + ?Sized,
    {
        settings.validate()?;
        let paths = self.template.paths_for_tier(settings);
        let mut builder = FrameSetBuilder::new(paths.len())?;
        let pool = build_thread_pool(self.threads.unwrap_or(settings.batch_size))?;

        let requests: Vec<(FrameIndex, &str)> = paths
            .iter()
            .enumerate()
            .map(|(i, p)| (FrameIndex(i), p.as_str()))
            .collect();
        let batch_count = requests.len().div_ceil(settings.batch_size);

        for (batch_idx, batch) in requests.chunks(settings.batch_size).enumerate() {
            let settled = pool.install(|| {
                batch
                    .par_iter()
                    .map(|&(idx, path)| self.settle(source, settings, idx, path).map(|f| (idx, f)))
                    .collect::<FramescrubResult<Vec<_>>>()
            })?;

            for (idx, frame) in settled {
                builder.fill(idx, frame)?;
                on_progress(builder.progress());
            }

            let is_last = batch_idx + 1 == batch_count;
            if !is_last && !settings.batch_pause.is_zero() {
                std::thread::sleep(settings.batch_pause);
            }
        }

        let progress = builder.progress();
        let set = builder.finish()?;
        tracing::info!(
            frames = set.len(),
            placeholders = progress.placeholders,
            "frame set ready"
        );
        Ok(set)
    }

    fn settle<S>(
        &self,
        source: &S,
        settings: &TierSettings,
        idx: FrameIndex,
        path: &str,
    ) -> FramescrubResult<PreparedFrame>
    where
        S: FrameSource + ?Sized,
    {
        match source.fetch(path).and_then(|bytes| decode_frame(&bytes)) {
            Ok(frame) => {
                tracing::trace!(slot = idx.0, path, "frame loaded");
                Ok(frame)
            }
            Err(err) => {
                tracing::warn!(slot = idx.0, path, error = %err, "frame failed to load, using placeholder");
                let number = self.template.source_number(idx, settings.frame_count);
                self.placeholders.paint(number)
            }
        }
    }
}

fn build_thread_pool(threads: usize) -> FramescrubResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .thread_name(|i| format!("framescrub-load-{i}"))
        .build()
        .map_err(|e| FramescrubError::asset(format!("failed to build loader thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
