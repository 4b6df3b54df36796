//! `/devices` handlers.
//!
//! Each handler maps one use case onto the envelope. Extractor rejections are
//! taken as values so they surface as 400 with the extractor's own message.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use di_core::device::{DeviceId, DevicePatch, DeviceRegistration};
use tracing::info;

use super::dto::{
    DeviceDto, DeviceListDto, DeviceLookupDto, RegisterDeviceRequest, RegisteredDto,
    UpdateDeviceRequest,
};
use super::envelope;
use super::error::ApiError;
use crate::bootstrap::AppRuntime;

pub const DEVICE_NOT_FOUND: &str = "Device not found";
pub const DEVICE_NOT_UPDATED: &str = "Device is not Updated";
pub const DEVICE_UPDATED: &str = "Device is Updated successfully...";
pub const DEVICE_DELETED: &str = "Device is Deleted successfully...";

fn device_id(path: Result<Path<i64>, PathRejection>) -> Result<DeviceId, ApiError> {
    let Path(id) = path?;
    Ok(DeviceId::new(id))
}

#[tracing::instrument(name = "http.devices.register", skip_all, err)]
pub async fn register_device(
    State(runtime): State<Arc<AppRuntime>>,
    payload: Result<Json<RegisterDeviceRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let registration = DeviceRegistration::try_from(req)?;

    let id = runtime
        .usecases()
        .register_device()
        .execute(registration)
        .await?;

    Ok(envelope::ok(RegisteredDto { id: id.value() }))
}

#[tracing::instrument(name = "http.devices.list", skip_all, err)]
pub async fn list_devices(State(runtime): State<Arc<AppRuntime>>) -> Result<Response, ApiError> {
    let devices = runtime.usecases().list_devices().execute().await?;

    Ok(envelope::ok(DeviceListDto {
        devices: devices.into_iter().map(DeviceDto::from).collect(),
    }))
}

#[tracing::instrument(name = "http.devices.get", skip_all, err)]
pub async fn get_device(
    State(runtime): State<Arc<AppRuntime>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = device_id(path)?;
    let devices = runtime.usecases().get_device().execute(id).await?;

    Ok(envelope::ok(DeviceLookupDto::from_devices(devices)))
}

/// Existence is checked before the body is looked at, so an unknown id
/// answers "not found" whatever the payload.
#[tracing::instrument(name = "http.devices.update", skip_all, err)]
pub async fn update_device(
    State(runtime): State<Arc<AppRuntime>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateDeviceRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = device_id(path)?;
    let usecases = runtime.usecases();

    if !usecases.device_exists().execute(id).await? {
        return Ok(envelope::soft_error(DEVICE_NOT_FOUND));
    }

    let Json(req) = payload?;
    let patch = DevicePatch::try_from(req)?;

    let affected = usecases.update_device().execute(id, &patch).await?;
    if affected == 0 {
        // Row removed between the existence check and the write.
        info!(device_id = %id, "Device vanished before update");
        return Ok(envelope::soft_error(DEVICE_NOT_UPDATED));
    }

    Ok(envelope::ok(DEVICE_UPDATED))
}

#[tracing::instrument(name = "http.devices.delete", skip_all, err)]
pub async fn delete_device(
    State(runtime): State<Arc<AppRuntime>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = device_id(path)?;

    match runtime.usecases().delete_device().execute(id).await? {
        0 => Ok(envelope::soft_error(DEVICE_NOT_FOUND)),
        _ => Ok(envelope::ok(DEVICE_DELETED)),
    }
}

#[tracing::instrument(name = "http.devices.monitoring", skip_all, err)]
pub async fn get_device_monitoring(
    State(runtime): State<Arc<AppRuntime>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = device_id(path)?;
    let devices = runtime
        .usecases()
        .get_device_monitoring()
        .execute(id)
        .await?;

    Ok(envelope::ok(DeviceLookupDto::from_devices(devices)))
}
