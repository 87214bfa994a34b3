use async_trait::async_trait;

use crate::domain::prescription::errors::TranscriptionError;
use crate::domain::prescription::model::{ImageAsset, TranscriptionResult};

pub struct TranscribePrescriptionParams {
    pub image: ImageAsset,
}

#[async_trait]
pub trait TranscribePrescriptionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: TranscribePrescriptionParams,
    ) -> Result<TranscriptionResult, TranscriptionError>;
}
