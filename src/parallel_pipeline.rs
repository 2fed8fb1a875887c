// THEORY:
// The `parallel_pipeline` module is the optional performance path. Because the
// classifier never consults a pixel's neighbors, the image can be cut into
// disjoint horizontal row bands and each band scrubbed independently; the
// result is bit-identical to the sequential pass in `pipeline`.
//
// The shape is a dispatcher plus a fixed worker pool: one unbounded mpsc
// channel feeds a round-robin dispatcher, each worker owns its own
// `ScrubPipeline` and receives band tasks on a private channel, and every task
// carries a oneshot sender for its reply. Bands travel as owned buffers, so
// no lock guards the pixel data at any point.

use crate::core_modules::pixel::pixel::CHANNELS;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::ScrubError;
use crate::pipeline::{ScrubConfig, ScrubPipeline, ScrubReport};
use std::path::Path;
use tokio::sync::{mpsc, oneshot};

/// One row band of the image, travelling to a worker and back.
struct BandTask {
    band_index: usize,
    band: Vec<u8>,
    result_sender: oneshot::Sender<BandResult>,
}

/// A scrubbed band plus how many pixels it rewrote.
struct BandResult {
    band_index: usize,
    band: Vec<u8>,
    transparent_count: usize,
}

struct WorkerPool {
    task_sender: mpsc::UnboundedSender<BandTask>,
    _workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    fn new(config: ScrubConfig, worker_count: usize) -> Self {
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<BandTask>();

        // Create a single dispatcher that distributes tasks to workers.
        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<BandTask>())
            .unzip();

        // Spawn dispatcher
        let dispatcher_senders = worker_senders;
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = dispatcher_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % dispatcher_senders.len();
            }
        });

        // Spawn workers
        let mut workers = Vec::new();
        for mut worker_receiver in worker_receivers {
            let pipeline = ScrubPipeline::new(config);

            let worker = tokio::spawn(async move {
                while let Some(mut task) = worker_receiver.recv().await {
                    let transparent_count = pipeline.scrub_buffer(&mut task.band);
                    let _ = task.result_sender.send(BandResult {
                        band_index: task.band_index,
                        band: task.band,
                        transparent_count,
                    });
                }
            });

            workers.push(worker);
        }

        Self {
            task_sender,
            _workers: workers,
        }
    }

    fn submit(
        &self,
        band_index: usize,
        band: Vec<u8>,
    ) -> Result<oneshot::Receiver<BandResult>, ScrubError> {
        let (result_sender, result_receiver) = oneshot::channel();
        self.task_sender
            .send(BandTask {
                band_index,
                band,
                result_sender,
            })
            .map_err(|_| ScrubError::Worker("failed to send band to worker pool"))?;
        Ok(result_receiver)
    }
}

/// Row-band parallel variant of `ScrubPipeline`. Same classification, same
/// output, spread over a worker pool sized to the machine.
pub struct ParallelScrubPipeline {
    worker_count: usize,
    worker_pool: WorkerPool,
}

impl ParallelScrubPipeline {
    /// Must be called from within a tokio runtime; the pool is spawned
    /// immediately.
    pub fn new(config: ScrubConfig) -> Self {
        let worker_count = num_cpus::get().max(1);
        Self {
            worker_count,
            worker_pool: WorkerPool::new(config, worker_count),
        }
    }

    /// Scrubs a flat RGBA8 buffer of the given dimensions in place, returning
    /// the number of pixels rewritten. Bit-identical to the sequential pass.
    pub async fn scrub_buffer(
        &self,
        buffer: &mut Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<usize, ScrubError> {
        if buffer.is_empty() || width == 0 || height == 0 {
            return Ok(0);
        }

        // Bands are whole rows, so no pixel straddles two workers.
        let band_rows = (height as usize).div_ceil(self.worker_count).max(1);
        let band_bytes = band_rows * width as usize * CHANNELS;

        let mut receivers = Vec::new();
        for (band_index, band) in buffer.chunks(band_bytes).enumerate() {
            receivers.push(self.worker_pool.submit(band_index, band.to_vec())?);
        }

        let mut transparent_count = 0;
        for reply in futures::future::join_all(receivers).await {
            let result = reply.map_err(|_| ScrubError::Worker("worker dropped a band reply"))?;
            let offset = result.band_index * band_bytes;
            buffer[offset..offset + result.band.len()].copy_from_slice(&result.band);
            transparent_count += result.transparent_count;
        }

        Ok(transparent_count)
    }

    /// Async counterpart of `ScrubPipeline::scrub_file`.
    pub async fn scrub_file(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<ScrubReport, ScrubError> {
        let (mut buffer, width, height) = image_helper::load(input_path)?;
        let transparent_count = self.scrub_buffer(&mut buffer, width, height).await?;
        image_helper::save(output_path, width, height, &buffer)?;

        Ok(ScrubReport {
            output_path: output_path.to_path_buf(),
            width,
            height,
            transparent_count,
        })
    }
}
