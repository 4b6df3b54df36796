use async_trait::async_trait;
use diesel::dsl::{exists, sql};
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use di_core::device::{Device, DeviceId, DevicePatch, DeviceRegistration, DeviceStatus};
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort, DeviceValidationError};

use crate::db::models::{DeviceChangesetRow, DeviceRow, NewDeviceRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::devices;

pub struct DieselDeviceRepository<E, RM, PM> {
    executor: E,
    row_mapper: RM,
    patch_mapper: PM,
}

impl<E, RM, PM> DieselDeviceRepository<E, RM, PM> {
    pub fn new(executor: E, row_mapper: RM, patch_mapper: PM) -> Self {
        Self {
            executor,
            row_mapper,
            patch_mapper,
        }
    }
}

/// Row mapping failures carry a `DeviceValidationError`; everything else is
/// the storage engine's.
fn into_repo_error(err: anyhow::Error) -> DeviceRepositoryError {
    match err.downcast_ref::<DeviceValidationError>() {
        Some(mapping) => DeviceRepositoryError::Mapping(mapping.to_string()),
        None => DeviceRepositoryError::Storage(err.to_string()),
    }
}

#[async_trait]
impl<E, RM, PM> DeviceRepositoryPort for DieselDeviceRepository<E, RM, PM>
where
    E: DbExecutor,
    RM: RowMapper<DeviceRow, Device>,
    PM: InsertMapper<DevicePatch, DeviceChangesetRow>,
{
    async fn insert(
        &self,
        registration: &DeviceRegistration,
        status: DeviceStatus,
        now_ms: i64,
    ) -> Result<DeviceId, DeviceRepositoryError> {
        let row = NewDeviceRow {
            name: registration.name.clone(),
            device_type: registration.device_type.clone(),
            status: status.as_str().to_string(),
            ip_address: registration.ip_address.clone(),
            os_type: registration.os_type.clone(),
            created_at: now_ms,
            updated_at: now_ms,
        };

        self.executor
            .run(|conn| {
                let id = diesel::insert_into(devices::table)
                    .values(&row)
                    .returning(devices::id)
                    .get_result::<i64>(conn)?;
                Ok(DeviceId::new(id))
            })
            .map_err(into_repo_error)
    }

    async fn find_by_id(&self, id: DeviceId) -> Result<Option<Device>, DeviceRepositoryError> {
        self.executor
            .run(|conn| {
                let row = devices::table
                    .find(id.value())
                    .select(DeviceRow::as_select())
                    .first::<DeviceRow>(conn)
                    .optional()?;

                match row {
                    Some(row) => Ok(Some(self.row_mapper.to_domain(&row)?)),
                    None => Ok(None),
                }
            })
            .map_err(into_repo_error)
    }

    async fn list_all(&self) -> Result<Vec<Device>, DeviceRepositoryError> {
        self.executor
            .run(|conn| {
                let rows = devices::table
                    .select(DeviceRow::as_select())
                    .order(devices::id.asc())
                    .load::<DeviceRow>(conn)?;

                rows.iter()
                    .map(|row| self.row_mapper.to_domain(row))
                    .collect()
            })
            .map_err(into_repo_error)
    }

    async fn exists(&self, id: DeviceId) -> Result<bool, DeviceRepositoryError> {
        self.executor
            .run(|conn| {
                let found = diesel::select(exists(devices::table.find(id.value())))
                    .get_result::<bool>(conn)?;
                Ok(found)
            })
            .map_err(into_repo_error)
    }

    async fn apply_patch(
        &self,
        id: DeviceId,
        patch: &DevicePatch,
        now_ms: i64,
    ) -> Result<u64, DeviceRepositoryError> {
        self.executor
            .run(|conn| {
                let changes = self.patch_mapper.to_row(patch)?;

                // One statement: the existence check and the merge cannot be
                // separated by a concurrent delete or update.
                let touched = diesel::update(devices::table.find(id.value()))
                    .set((
                        &changes,
                        devices::updated_at.eq(sql::<BigInt>("MAX(created_at, ")
                            .bind::<BigInt, _>(now_ms)
                            .sql(")")),
                    ))
                    .execute(conn)?;
                Ok(touched as u64)
            })
            .map_err(into_repo_error)
    }

    async fn delete(&self, id: DeviceId) -> Result<u64, DeviceRepositoryError> {
        self.executor
            .run(|conn| {
                let removed = diesel::delete(devices::table.find(id.value())).execute(conn)?;
                Ok(removed as u64)
            })
            .map_err(into_repo_error)
    }
}
