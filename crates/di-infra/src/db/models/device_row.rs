use crate::db::schema::devices;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = devices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DeviceRow {
    pub id: i64,
    pub name: String,
    pub device_type: String,
    pub status: String,
    pub ip_address: String,
    pub os_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = devices)]
pub struct NewDeviceRow {
    pub name: String,
    pub device_type: String,
    pub status: String,
    pub ip_address: String,
    pub os_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Column-level patch. `None` fields are left out of the `SET` clause.
///
/// `updated_at` is not part of the changeset; the repository always sets it.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = devices)]
pub struct DeviceChangesetRow {
    pub name: Option<String>,
    pub device_type: Option<String>,
    pub status: Option<String>,
    pub ip_address: Option<String>,
    pub os_type: Option<String>,
}
