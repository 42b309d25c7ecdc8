use crate::dataset::{Dataset, DatasetBuilder, Payload};
use crate::ports::{NodeDecorator, PayloadSource, ProgressReporter};
use crate::shared::Result;

/// One-shot hook invoked with the raw payload once the walk completes.
type ReadyHook = Box<dyn FnOnce(&Payload) + Send>;

/// BuildDatasetUseCase - fetch the two source documents, walk the
/// manifest, deliver the dataset.
///
/// The two fetches run concurrently and are joined before traversal; if
/// either fails, initialization fails as a whole and the walk never
/// starts. Once both documents are available the walk runs synchronously
/// to completion with no further suspension.
///
/// # Type Parameters
/// * `S` - PayloadSource implementation
/// * `D` - NodeDecorator implementation
/// * `P` - ProgressReporter implementation
pub struct BuildDatasetUseCase<S, D, P> {
    source: S,
    decorator: D,
    progress_reporter: P,
    ready_hook: Option<ReadyHook>,
}

impl<S, D, P> BuildDatasetUseCase<S, D, P>
where
    S: PayloadSource,
    D: NodeDecorator,
    P: ProgressReporter,
{
    /// Creates a new BuildDatasetUseCase with injected dependencies
    pub fn new(source: S, decorator: D, progress_reporter: P) -> Self {
        Self {
            source,
            decorator,
            progress_reporter,
            ready_hook: None,
        }
    }

    /// Registers a hook invoked exactly once, after the full walk
    /// completes, with the raw manifest payload. Lets embedders react to
    /// completion without polling or ambient event dispatch.
    pub fn with_ready_hook(mut self, hook: impl FnOnce(&Payload) + Send + 'static) -> Self {
        self.ready_hook = Some(Box::new(hook));
        self
    }

    /// Executes the use case.
    ///
    /// # Returns
    /// The complete dataset: summaries, linker, counters, raw node/edge
    /// lists, totals and the flags document.
    ///
    /// # Errors
    /// Fails before traversal if either source document cannot be loaded;
    /// fails during traversal on a dangling `usedBy` reference or a
    /// version without a descriptor. No partial dataset is ever returned.
    pub async fn execute(mut self) -> Result<Dataset> {
        self.progress_reporter
            .report("📡 Loading payload and flags documents...");

        let (payload, flags) =
            tokio::try_join!(self.source.fetch_payload(), self.source.fetch_flags())?;

        let dataset = DatasetBuilder::new(&self.decorator).build(&payload, flags)?;

        if let Some(hook) = self.ready_hook.take() {
            hook(&payload);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Dataset ready: {} package(s), {} node(s), {} edge(s)",
            dataset.dependencies_count,
            dataset.raw_nodes.len(),
            dataset.raw_edges.len()
        ));

        Ok(dataset)
    }
}
