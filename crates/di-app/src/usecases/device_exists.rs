use std::sync::Arc;

use di_core::device::DeviceId;
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};

pub struct DeviceExists {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl DeviceExists {
    pub fn from_ports(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(
        name = "usecase.device_exists.execute",
        skip(self),
        fields(device_id = %id)
    )]
    pub async fn execute(&self, id: DeviceId) -> Result<bool, DeviceRepositoryError> {
        self.device_repo.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::mocks::MockDeviceRepo;

    #[tokio::test]
    async fn test_execute_reports_repository_answer() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_exists()
            .returning(|id| Ok(id.value() == 1));
        let use_case = DeviceExists::from_ports(Arc::new(repo));

        assert!(use_case.execute(DeviceId::new(1)).await.unwrap());
        assert!(!use_case.execute(DeviceId::new(2)).await.unwrap());
    }
}
