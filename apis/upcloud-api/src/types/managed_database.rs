// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed database types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use super::common::Label;

/// Database engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ManagedDatabaseServiceType {
    Pg,
    Mysql,
    Redis,
    Opensearch,
    Valkey,
}

/// Observed state of a managed database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ManagedDatabaseState {
    Running,
    Rebalancing,
    Rebuilding,
    Poweroff,
    #[serde(other)]
    Unknown,
}

/// Weekly maintenance window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseMaintenanceTime {
    /// Lowercase weekday, e.g. `monday`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dow: String,
    /// `HH:MM:SS`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseComponent {
    pub component: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: u16,
    /// `dynamic` or `public`
    #[serde(default)]
    pub route: String,
    /// `primary` or `replica`
    #[serde(default)]
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseNodeState {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseServiceUriParams {
    #[serde(default, rename = "dbname")]
    pub database_name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub ssl_mode: String,
    #[serde(default)]
    pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mysql_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opensearch_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valkey_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_block_threshold_exceeded: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseBackup {
    pub backup_name: String,
    pub backup_time: DateTime<Utc>,
    #[serde(default)]
    pub data_size: u64,
}

/// Private network attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseNetwork {
    pub name: String,
    #[serde(rename = "type")]
    pub network_type: String,
    pub family: String,
    pub uuid: String,
}

/// Engine specific configuration keyed by property name
pub type ManagedDatabaseProperties = BTreeMap<String, Value>;

/// Managed database service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabase {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ManagedDatabaseServiceType,
    pub plan: String,
    pub zone: String,
    pub state: ManagedDatabaseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operational_state: Option<ManagedDatabaseState>,
    #[serde(default)]
    pub powered: bool,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub node_states: Vec<ManagedDatabaseNodeState>,
    #[serde(default)]
    pub components: Vec<ManagedDatabaseComponent>,
    #[serde(default)]
    pub backups: Vec<ManagedDatabaseBackup>,
    #[serde(default)]
    pub maintenance: ManagedDatabaseMaintenanceTime,
    #[serde(default)]
    pub properties: ManagedDatabaseProperties,
    #[serde(default)]
    pub metadata: ManagedDatabaseMetadata,
    #[serde(default)]
    pub service_uri: String,
    #[serde(default)]
    pub service_uri_params: ManagedDatabaseServiceUriParams,
    #[serde(default)]
    pub users: Vec<ManagedDatabaseUser>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub networks: Vec<ManagedDatabaseNetwork>,
    #[serde(default)]
    pub termination_protection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseServicePlan {
    pub plan: String,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub core_number: u32,
    #[serde(default)]
    pub memory_amount: u32,
    #[serde(default)]
    pub storage_size: u32,
    #[serde(default)]
    pub zones: BTreeMap<String, Value>,
    #[serde(default)]
    pub backup_config: BTreeMap<String, Value>,
}

/// Engine offering as listed under `/database/service-types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseType {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latest_available_version: String,
    #[serde(default)]
    pub service_plans: Vec<ManagedDatabaseServicePlan>,
    /// JSON schema of each configurable property
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagedDatabaseUserType {
    Primary,
    #[default]
    Normal,
}

/// MySQL password hashing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagedDatabaseUserAuthentication {
    CachingSha2Password,
    MysqlNativePassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUserPgAccessControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_replication: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUserRedisAccessControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<String>>,
}

pub type ManagedDatabaseUserValkeyAccessControl = ManagedDatabaseUserRedisAccessControl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUserOpenSearchAccessControlRule {
    pub index: String,
    /// `deny`, `admin`, `read`, `readwrite` or `write`
    pub permission: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUserOpenSearchAccessControl {
    #[serde(default)]
    pub rules: Vec<ManagedDatabaseUserOpenSearchAccessControlRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUser {
    pub username: String,
    #[serde(rename = "type")]
    pub user_type: ManagedDatabaseUserType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ManagedDatabaseUserAuthentication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pg_access_control: Option<ManagedDatabaseUserPgAccessControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_access_control: Option<ManagedDatabaseUserRedisAccessControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valkey_access_control: Option<ManagedDatabaseUserValkeyAccessControl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opensearch_access_control: Option<ManagedDatabaseUserOpenSearchAccessControl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseLogicalDatabase {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lc_collate: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lc_ctype: String,
}

/// Active session of a PostgreSQL or MySQL database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseConnection {
    #[serde(default)]
    pub application_name: String,
    #[serde(default)]
    pub backend_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub backend_type: String,
    #[serde(default)]
    pub client_addr: String,
    #[serde(default)]
    pub client_hostname: String,
    #[serde(default)]
    pub client_port: i32,
    #[serde(default, rename = "datname")]
    pub database_name: String,
    pub pid: i64,
    #[serde(default)]
    pub query: String,
    /// Nanoseconds
    #[serde(default)]
    pub query_duration: i64,
    #[serde(default)]
    pub query_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub state_change: Option<DateTime<Utc>>,
    #[serde(default, rename = "usename")]
    pub username: String,
    #[serde(default)]
    pub wait_event: String,
    #[serde(default)]
    pub wait_event_type: String,
    #[serde(default)]
    pub xact_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseQueryStatisticsPostgres {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub calls: i64,
    #[serde(default)]
    pub rows: i64,
    #[serde(default)]
    pub total_time: f64,
    #[serde(default)]
    pub mean_time: f64,
    #[serde(default)]
    pub min_time: f64,
    #[serde(default)]
    pub max_time: f64,
    #[serde(default)]
    pub stddev_time: f64,
    #[serde(default)]
    pub database_name: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub shared_blks_hit: i64,
    #[serde(default)]
    pub shared_blks_read: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseQueryStatisticsMySql {
    #[serde(default)]
    pub count_star: i64,
    #[serde(default)]
    pub digest: String,
    #[serde(default)]
    pub digest_text: String,
    #[serde(default)]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub schema_name: String,
    #[serde(default)]
    pub sum_rows_examined: i64,
    #[serde(default)]
    pub sum_rows_sent: i64,
    #[serde(default)]
    pub sum_timer_wait: i64,
    #[serde(default)]
    pub avg_timer_wait: i64,
    #[serde(default)]
    pub max_timer_wait: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseQueryStatistics {
    #[serde(default)]
    pub mysql: Vec<ManagedDatabaseQueryStatisticsMySql>,
    #[serde(default, rename = "pg")]
    pub postgres: Vec<ManagedDatabaseQueryStatisticsPostgres>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetricsColumn {
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetricsChartData {
    #[serde(default)]
    pub cols: Vec<ManagedDatabaseMetricsColumn>,
    /// First column is the timestamp, the rest one value per node
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetricsChartHints {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetricsChart {
    #[serde(default)]
    pub data: ManagedDatabaseMetricsChartData,
    #[serde(default)]
    pub hints: ManagedDatabaseMetricsChartHints,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedDatabaseMetrics {
    #[serde(default)]
    pub cpu_usage: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub disk_usage: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub diskio_reads: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub diskio_writes: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub load_average: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub mem_usage: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub net_receive: ManagedDatabaseMetricsChart,
    #[serde(default)]
    pub net_send: ManagedDatabaseMetricsChart,
}

/// Time span of a metrics query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ManagedDatabaseMetricPeriod {
    #[default]
    Hour,
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ManagedDatabaseLogOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseLogEntry {
    pub message: String,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub service: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseLogs {
    #[serde(default)]
    pub first_log_offset: String,
    #[serde(default)]
    pub logs: Vec<ManagedDatabaseLogEntry>,
    #[serde(default)]
    pub offset: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseIndex {
    pub index_name: String,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub docs: u64,
    #[serde(default)]
    pub health: String,
    #[serde(default)]
    pub number_of_replicas: u32,
    #[serde(default)]
    pub number_of_shards: u32,
    #[serde(default)]
    pub read_only_allow_delete: bool,
    /// Bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDatabaseUpgradeAvailableVersions {
    #[serde(default)]
    pub available_versions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_managed_database() {
        let db: ManagedDatabase = serde_json::from_value(json!({
            "backups": [{"backup_name": "2022-02-17_1440_00000000", "backup_time": "2022-02-17T14:40:00Z", "data_size": 36700160}],
            "components": [{"component": "pg", "host": "pg-1234.db.upclouddatabases.com", "port": 11550, "route": "dynamic", "usage": "primary"}],
            "create_time": "2022-01-01T09:00:00Z",
            "maintenance": {"dow": "monday", "time": "12:00:00"},
            "name": "pg-1234",
            "node_count": 1,
            "node_states": [{"name": "pg-1234-1", "role": "master", "state": "running"}],
            "plan": "1x1xCPU-2GB-25GB",
            "powered": true,
            "properties": {"automatic_utility_network_ip_filter": true, "ip_filter": ["10.0.0.1/32"], "max_connections": 50},
            "service_uri": "postgres://upadmin:pw@pg-1234.db.upclouddatabases.com:11550/defaultdb?sslmode=require",
            "service_uri_params": {"dbname": "defaultdb", "host": "pg-1234.db.upclouddatabases.com", "password": "pw", "port": "11550", "ssl_mode": "require", "user": "upadmin"},
            "state": "running",
            "title": "pg",
            "type": "pg",
            "update_time": "2022-01-01T09:10:00Z",
            "users": [{"username": "upadmin", "type": "primary", "password": "pw"}],
            "uuid": "9a8effcb-80e6-4a63-a7e5-066a6d093c14",
            "zone": "fi-hel1",
            "metadata": {"max_connections": 100, "pg_version": "14.6"},
            "labels": [{"key": "env", "value": "prod"}]
        }))
        .unwrap();
        assert_eq!(db.service_type, ManagedDatabaseServiceType::Pg);
        assert_eq!(db.state, ManagedDatabaseState::Running);
        assert_eq!(db.service_uri_params.database_name, "defaultdb");
        assert_eq!(db.users[0].user_type, ManagedDatabaseUserType::Primary);
        assert_eq!(db.properties.get("max_connections"), Some(&json!(50)));
        assert_eq!(db.metadata.pg_version.as_deref(), Some("14.6"));
        assert_eq!(db.backups[0].data_size, 36700160);
    }

    #[test]
    fn test_decode_query_statistics() {
        let stats: ManagedDatabaseQueryStatistics = serde_json::from_value(json!({
            "pg": [{"query": "SELECT 1", "calls": 3, "rows": 3, "total_time": 0.5, "database_name": "defaultdb", "user_name": "upadmin"}]
        }))
        .unwrap();
        assert!(stats.mysql.is_empty());
        assert_eq!(stats.postgres[0].calls, 3);
    }

    #[test]
    fn test_decode_metrics() {
        let metrics: ManagedDatabaseMetrics = serde_json::from_value(json!({
            "cpu_usage": {
                "data": {
                    "cols": [{"label": "time", "type": "date"}, {"label": "pg-1 (master)", "type": "number"}],
                    "rows": [["2022-01-21T13:10:30Z", 2.744682398273781]]
                },
                "hints": {"title": "CPU usage %"}
            }
        }))
        .unwrap();
        assert_eq!(metrics.cpu_usage.hints.title, "CPU usage %");
        assert_eq!(metrics.cpu_usage.data.rows.len(), 1);
        assert!(metrics.mem_usage.data.cols.is_empty());
    }

    #[test]
    fn test_enum_strings() {
        assert_eq!(ManagedDatabaseMetricPeriod::Week.to_string(), "week");
        assert_eq!(
            "opensearch".parse::<ManagedDatabaseServiceType>().unwrap(),
            ManagedDatabaseServiceType::Opensearch
        );
    }
}
