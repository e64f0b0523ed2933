use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::Future;
use futures::task::Context;
use futures::task::Poll;
use tower::timeout::TimeoutLayer;
use tower::util::BoxService;
use tower::{BoxError, Service, ServiceBuilder};

use crate::pipeline::orchestration::pipeline_orchestrator::PipelineOrchestrator;
use crate::pipeline::types::AnalysisResult;

/// Request boundary: raw image bytes in, analysis out
#[derive(Clone)]
pub struct AnalyzerService {
    inner: Arc<PipelineOrchestrator>,
}

impl AnalyzerService {
    pub fn new(inner: Arc<PipelineOrchestrator>) -> Self {
        Self { inner }
    }
}

impl Service<Vec<u8>> for AnalyzerService {
    type Response = AnalysisResult;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Vec<u8>) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            let result = inner.analyze_bytes(&req).await?;
            Ok(result)
        })
    }
}

pub struct AnalyzerBuilder {
    orchestrator: Arc<PipelineOrchestrator>,
    analyzer_timeout: Option<Duration>,
}

impl AnalyzerBuilder {
    pub fn new(orchestrator: PipelineOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            analyzer_timeout: None,
        }
    }

    pub fn analyzer_timeout(mut self, analyzer_timeout: Duration) -> Self {
        self.analyzer_timeout = Some(analyzer_timeout);
        self
    }

    pub fn build(self) -> BoxService<Vec<u8>, AnalysisResult, BoxError> {
        let analyzer = ServiceBuilder::new()
            .option_layer(self.analyzer_timeout.map(TimeoutLayer::new))
            .service(AnalyzerService::new(self.orchestrator));

        BoxService::new(analyzer)
    }
}
