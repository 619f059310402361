// src/domain/dashboard/mod.rs
mod repository;

pub use repository::DashboardRepository;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatFormat {
    Currency,
    Number,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStat {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub change: f64,
    pub format: StatFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOrder {
    pub id: String,
    pub partner: String,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalType {
    Merchant,
    Product,
    Payout,
    Order,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardApproval {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ApprovalType,
    pub priority: ApprovalPriority,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    pub uptime: f64,
    pub avg_latency: f64,
    pub error_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Vec<DashboardStat>,
    pub recent_orders: Vec<DashboardOrder>,
    pub approvals: Vec<DashboardApproval>,
    pub api_health: ApiHealth,
    pub last_synced_at: DateTime<Utc>,
}

/// Dashboard payload as returned by the backend; every section may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDashboard {
    pub stats: Option<Vec<DashboardStat>>,
    pub recent_orders: Option<Vec<DashboardOrder>>,
    pub approvals: Option<Vec<DashboardApproval>>,
    pub api_health: Option<ApiHealth>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl DashboardData {
    /// Fills every missing section of `partial` from `self`.
    pub fn merged_with(self, partial: PartialDashboard) -> Self {
        Self {
            stats: partial.stats.unwrap_or(self.stats),
            recent_orders: partial.recent_orders.unwrap_or(self.recent_orders),
            approvals: partial.approvals.unwrap_or(self.approvals),
            api_health: partial.api_health.unwrap_or(self.api_health),
            last_synced_at: partial.last_synced_at.unwrap_or(self.last_synced_at),
        }
    }

    /// Static snapshot shown when the metrics endpoint is unreachable or
    /// not configured.
    pub fn fallback() -> Self {
        let at = |y, mo, d, h, mi| {
            Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
                .single()
                .unwrap_or_default()
        };

        let stat = |key: &str, label: &str, value: f64, change: f64, format, trend: &str| {
            DashboardStat {
                key: key.into(),
                label: label.into(),
                value,
                change,
                format,
                trend_label: Some(trend.into()),
            }
        };

        Self {
            stats: vec![
                stat("revenue", "Total revenue", 128_450_000.0, 12.4, StatFormat::Currency, "vs last week"),
                stat("orders", "New orders", 214.0, 8.1, StatFormat::Number, "last 7 days"),
                stat("partners", "Active partners", 47.0, 4.3, StatFormat::Number, "online"),
                stat("payouts", "Pending orders", 32.0, -5.6, StatFormat::Number, "due today"),
            ],
            recent_orders: vec![
                DashboardOrder {
                    id: "ORD-2094".into(),
                    partner: "Nhà thuốc Lâm Phượng".into(),
                    total: 1_250_000.0,
                    status: OrderStatus::Processing,
                    created_at: at(2025, 11, 14, 2, 45),
                },
                DashboardOrder {
                    id: "ORD-2095".into(),
                    partner: "Clinic Hạnh Phúc".into(),
                    total: 3_940_000.0,
                    status: OrderStatus::Completed,
                    created_at: at(2025, 11, 14, 1, 12),
                },
                DashboardOrder {
                    id: "ORD-2096".into(),
                    partner: "Tiệm thuốc An Khang".into(),
                    total: 860_000.0,
                    status: OrderStatus::Pending,
                    created_at: at(2025, 11, 13, 23, 33),
                },
                DashboardOrder {
                    id: "ORD-2097".into(),
                    partner: "Khoa Dược Minh Tâm".into(),
                    total: 5_420_000.0,
                    status: OrderStatus::Failed,
                    created_at: at(2025, 11, 13, 20, 5),
                },
            ],
            approvals: vec![
                DashboardApproval {
                    id: "APR-811".into(),
                    name: "Release stock for order ORD-2098".into(),
                    kind: ApprovalType::Order,
                    priority: ApprovalPriority::High,
                    submitted_at: at(2025, 11, 14, 1, 30),
                },
                DashboardApproval {
                    id: "APR-812".into(),
                    name: "Partner registration Kim Ngân".into(),
                    kind: ApprovalType::Merchant,
                    priority: ApprovalPriority::Medium,
                    submitted_at: at(2025, 11, 13, 18, 10),
                },
                DashboardApproval {
                    id: "APR-813".into(),
                    name: "November payout run".into(),
                    kind: ApprovalType::Payout,
                    priority: ApprovalPriority::Low,
                    submitted_at: at(2025, 11, 13, 15, 55),
                },
            ],
            api_health: ApiHealth {
                uptime: 99.4,
                avg_latency: 182.0,
                error_rate: 0.4,
            },
            last_synced_at: at(2025, 11, 14, 2, 50),
        }
    }
}
