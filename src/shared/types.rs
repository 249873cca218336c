use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardDto {
    pub user: UserProfileDto,
    pub billing: BillingHistoryDto,
    pub breakdown: EnergyBreakdownDto,
    pub live: LiveUsageDto,
    pub co2: Co2StatsDto,
    pub suggestions: Vec<SuggestionDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfileDto {
    pub name: String,
    pub plan: String,
    pub address: String,
    pub member_since: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPeriodDto {
    pub period_label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingHistoryDto {
    pub periods: Vec<BillingPeriodDto>,
    /// Display-ready, e.g. "+12.7% vs last month"
    pub change: String,
    pub amount_due: f64,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyCategoryDto {
    pub category_name: String,
    pub value: f64, // kWh
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyBreakdownDto {
    pub categories: Vec<EnergyCategoryDto>,
    pub total: f64, // kWh
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSampleDto {
    pub time_label: String,
    pub value: f64, // kW
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiveUsageDto {
    pub current_kw: f64,
    pub samples: Vec<UsageSampleDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Co2StatsDto {
    pub saved_kg: f64,
    pub goal_kg: f64,
    pub emitted_kg: f64,
    pub trees_equivalent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDto {
    pub title: String,
    pub detail: String,
    pub monthly_saving: f64,
}
