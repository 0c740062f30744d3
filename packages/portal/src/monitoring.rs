//! Demo monitoring data for the dashboards: divisions, pumps, complaints and
//! the committee's village summary. Everything here is fixed sample data plus
//! the arithmetic the dashboards show over it.

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, TrKey};
use crate::session::Tone;

/// Water quality band for a WQI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WqiBand {
    Good,
    Moderate,
    Unsafe,
}

/// Top of the WQI scale.
pub const WQI_MAX: u8 = 100;

/// Share of a meter to fill for a score. Scores past the scale fill it.
pub fn wqi_fill_percent(wqi: u8) -> u8 {
    wqi.min(WQI_MAX)
}

impl WqiBand {
    pub fn from_wqi(wqi: u8) -> Self {
        match wqi {
            80..=u8::MAX => WqiBand::Good,
            60..=79 => WqiBand::Moderate,
            _ => WqiBand::Unsafe,
        }
    }

    pub fn label_key(self) -> TrKey {
        match self {
            WqiBand::Good => TrKey::QualityGood,
            WqiBand::Moderate => TrKey::QualityModerate,
            WqiBand::Unsafe => TrKey::QualityUnsafe,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            WqiBand::Good => Tone::Safe,
            WqiBand::Moderate => Tone::Warning,
            WqiBand::Unsafe => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpMode {
    Auto,
    Manual,
}

impl PumpMode {
    pub fn toggled(self) -> Self {
        match self {
            PumpMode::Auto => PumpMode::Manual,
            PumpMode::Manual => PumpMode::Auto,
        }
    }

    pub fn label_key(self) -> TrKey {
        match self {
            PumpMode::Auto => TrKey::TechnicianAuto,
            PumpMode::Manual => TrKey::TechnicianManual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpStatus {
    Running,
    Stopped,
    Maintenance,
}

impl PumpStatus {
    /// Start/stop button: a running pump stops, anything else starts.
    pub fn toggled(self) -> Self {
        match self {
            PumpStatus::Running => PumpStatus::Stopped,
            PumpStatus::Stopped | PumpStatus::Maintenance => PumpStatus::Running,
        }
    }

    pub fn label_key(self) -> TrKey {
        match self {
            PumpStatus::Running => TrKey::TechnicianRunning,
            PumpStatus::Stopped => TrKey::TechnicianStopped,
            PumpStatus::Maintenance => TrKey::UserMaintenance,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            PumpStatus::Running => Tone::Safe,
            PumpStatus::Stopped => Tone::Warning,
            PumpStatus::Maintenance => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pump {
    pub mode: PumpMode,
    pub status: PumpStatus,
    pub runtime_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub id: &'static str,
    pub name_hi: &'static str,
    pub name_en: &'static str,
    pub wqi: u8,
    pub population: u32,
    pub complaints: u32,
    pub leakages: u32,
    /// Line pressure in PSI.
    pub pressure: f64,
    pub pump: Pump,
}

impl Division {
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Hi => self.name_hi,
            Language::En => self.name_en,
        }
    }

    pub fn band(&self) -> WqiBand {
        WqiBand::from_wqi(self.wqi)
    }

    pub fn under_maintenance(&self) -> bool {
        self.pump.status == PumpStatus::Maintenance
    }
}

#[allow(clippy::too_many_arguments)]
fn division(
    id: &'static str,
    name_hi: &'static str,
    name_en: &'static str,
    wqi: u8,
    population: u32,
    complaints: u32,
    leakages: u32,
    pressure: f64,
    mode: PumpMode,
    status: PumpStatus,
    runtime_hours: f64,
) -> Division {
    Division {
        id,
        name_hi,
        name_en,
        wqi,
        population,
        complaints,
        leakages,
        pressure,
        pump: Pump {
            mode,
            status,
            runtime_hours,
        },
    }
}

pub fn demo_divisions() -> Vec<Division> {
    use PumpMode::{Auto, Manual};
    use PumpStatus::{Maintenance, Running, Stopped};

    vec![
        division("rampur", "रामपुर", "Rampur", 85, 1250, 2, 0, 42.3, Auto, Running, 18.5),
        division("danapur", "दानापुर", "Danapur", 72, 980, 5, 1, 38.1, Manual, Stopped, 12.2),
        division("sagar", "सागर", "Sagar", 91, 1450, 1, 0, 45.8, Auto, Running, 22.1),
        division("madhopur", "मधोपुर", "Madhopur", 68, 1120, 8, 2, 0.0, Manual, Maintenance, 0.0),
        division("gopalganj", "गोपालगंज", "Gopalganj", 45, 890, 12, 3, 35.2, Auto, Running, 16.8),
        division("chandipur", "चंदीपुर", "Chandipur", 88, 1350, 3, 0, 44.1, Auto, Running, 20.3),
    ]
}

/// Roll-up shown on the administrator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub total_population: u32,
    pub average_wqi: u32,
    pub running_pumps: usize,
    pub total_complaints: u32,
    pub total_leakages: u32,
    /// Rounded to one decimal.
    pub average_pressure: f64,
}

impl SystemMetrics {
    pub fn from_divisions(divisions: &[Division]) -> Self {
        let count = divisions.len();
        let total_population = divisions.iter().map(|d| d.population).sum();
        let running_pumps = divisions
            .iter()
            .filter(|d| d.pump.status == PumpStatus::Running)
            .count();
        let total_complaints = divisions.iter().map(|d| d.complaints).sum();
        let total_leakages = divisions.iter().map(|d| d.leakages).sum();

        if count == 0 {
            return Self {
                total_population,
                average_wqi: 0,
                running_pumps,
                total_complaints,
                total_leakages,
                average_pressure: 0.0,
            };
        }

        let wqi_sum: u32 = divisions.iter().map(|d| u32::from(d.wqi)).sum();
        let average_wqi = (f64::from(wqi_sum) / count as f64).round() as u32;

        // Sum in tenths so the rounding is not at the mercy of float error.
        let pressure_tenths: i64 = divisions
            .iter()
            .map(|d| (d.pressure * 10.0).round() as i64)
            .sum();
        let average_pressure = (pressure_tenths as f64 / count as f64).round() / 10.0;

        Self {
            total_population,
            average_wqi,
            running_pumps,
            total_complaints,
            total_leakages,
            average_pressure,
        }
    }
}

/// Pump states the technician can flip. Changes live in memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct PumpBoard {
    divisions: Vec<Division>,
}

impl PumpBoard {
    pub fn new(divisions: Vec<Division>) -> Self {
        Self { divisions }
    }

    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn pump(&self, division_id: &str) -> Option<&Pump> {
        self.divisions
            .iter()
            .find(|d| d.id == division_id)
            .map(|d| &d.pump)
    }

    /// Returns `false` for an unknown division.
    pub fn toggle_mode(&mut self, division_id: &str) -> bool {
        self.update(division_id, |pump| pump.mode = pump.mode.toggled())
    }

    /// Returns `false` for an unknown division.
    pub fn toggle_status(&mut self, division_id: &str) -> bool {
        self.update(division_id, |pump| pump.status = pump.status.toggled())
    }

    fn update(&mut self, division_id: &str, f: impl FnOnce(&mut Pump)) -> bool {
        match self.divisions.iter_mut().find(|d| d.id == division_id) {
            Some(division) => {
                f(&mut division.pump);
                tracing::debug!(
                    division = division_id,
                    mode = ?division.pump.mode,
                    status = ?division.pump.status,
                    "pump updated"
                );
                true
            }
            None => false,
        }
    }
}

impl Default for PumpBoard {
    fn default() -> Self {
        Self::new(demo_divisions())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn label_key(self) -> TrKey {
        match self {
            ComplaintStatus::Pending => TrKey::UserPending,
            ComplaintStatus::InProgress => TrKey::UserInProgress,
            ComplaintStatus::Resolved => TrKey::UserResolved,
        }
    }

    pub fn is_open(self) -> bool {
        self != ComplaintStatus::Resolved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label_key(self) -> TrKey {
        match self {
            Priority::High => TrKey::AdminHigh,
            Priority::Medium => TrKey::AdminMedium,
            Priority::Low => TrKey::AdminLow,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Danger,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Safe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: u32,
    /// Division or household the complaint came from.
    pub place: &'static str,
    pub issue: TrKey,
    pub status: ComplaintStatus,
    pub priority: Priority,
    pub reported: &'static str,
}

fn complaint(
    id: u32,
    place: &'static str,
    issue: TrKey,
    status: ComplaintStatus,
    priority: Priority,
    reported: &'static str,
) -> Complaint {
    Complaint {
        id,
        place,
        issue,
        status,
        priority,
        reported,
    }
}

/// Complaints filed by the signed-in citizen.
pub fn citizen_complaints() -> Vec<Complaint> {
    use ComplaintStatus::*;
    vec![
        complaint(1, "रामपुर", TrKey::IssueNoSupply, Pending, Priority::High, "2025-01-15"),
        complaint(2, "रामपुर", TrKey::IssueLowPressure, Resolved, Priority::Medium, "2025-01-14"),
        complaint(3, "रामपुर", TrKey::IssueMuddyWater, InProgress, Priority::High, "2025-01-13"),
    ]
}

/// Latest complaints across all divisions.
pub fn recent_complaints() -> Vec<Complaint> {
    use ComplaintStatus::*;
    vec![
        complaint(1, "गोपालगंज", TrKey::IssueMuddyWater, Pending, Priority::High, "2h"),
        complaint(2, "मधोपुर", TrKey::IssuePumpFailure, InProgress, Priority::High, "4h"),
        complaint(3, "दानापुर", TrKey::IssueLowPressure, Pending, Priority::Medium, "6h"),
        complaint(4, "चंदीपुर", TrKey::IssuePipeLeak, Resolved, Priority::Medium, "1d"),
        complaint(5, "रामपुर", TrKey::IssueIrregularSupply, Pending, Priority::Low, "2d"),
    ]
}

/// Household complaints the village committee tracks.
pub fn committee_complaints() -> Vec<Complaint> {
    use ComplaintStatus::*;
    vec![
        complaint(1, "#45", TrKey::IssueNoSupply, Pending, Priority::High, "2025-01-15"),
        complaint(2, "#123", TrKey::IssueLowPressure, InProgress, Priority::Medium, "2025-01-14"),
        complaint(3, "#89", TrKey::IssueMuddyWater, Resolved, Priority::High, "2025-01-13"),
    ]
}

pub fn open_count(complaints: &[Complaint]) -> usize {
    complaints.iter().filter(|c| c.status.is_open()).count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageSummary {
    pub name_hi: &'static str,
    pub name_en: &'static str,
    pub population: u32,
    pub households: u32,
    pub wqi: u8,
    pub morning_slot: &'static str,
    pub evening_slot: &'static str,
    /// Share of households supplied today.
    pub today_supply_percent: u8,
}

pub fn demo_village() -> VillageSummary {
    VillageSummary {
        name_hi: "रामपुर",
        name_en: "Rampur",
        population: 1245,
        households: 287,
        wqi: 85,
        morning_slot: "6:00 AM - 8:00 AM",
        evening_slot: "5:00 PM - 7:00 PM",
        today_supply_percent: 95,
    }
}

/// Committee accounts, in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub monthly_collection: i64,
    pub monthly_expense: i64,
    pub balance: i64,
    pub pending_payments: u32,
}

impl FinancialSummary {
    pub fn monthly_surplus(&self) -> i64 {
        self.monthly_collection - self.monthly_expense
    }
}

pub fn demo_finances() -> FinancialSummary {
    FinancialSummary {
        monthly_collection: 45_800,
        monthly_expense: 32_400,
        balance: 125_600,
        pending_payments: 18,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    pub ph: f64,
    /// NTU.
    pub turbidity: f64,
    /// mg/L.
    pub dissolved_oxygen: f64,
    /// mg/L.
    pub nitrate: f64,
    /// PSI.
    pub pressure: f64,
    /// L/min.
    pub flow_rate: f64,
}

pub fn demo_sensors() -> SensorReadings {
    SensorReadings {
        ph: 7.2,
        turbidity: 2.1,
        dissolved_oxygen: 8.4,
        nitrate: 12.3,
        pressure: 45.2,
        flow_rate: 125.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_fill_is_clamped_to_scale() {
        assert_eq!(wqi_fill_percent(0), 0);
        assert_eq!(wqi_fill_percent(85), 85);
        assert_eq!(wqi_fill_percent(100), 100);
        assert_eq!(wqi_fill_percent(255), 100);
        assert_eq!(WqiBand::from_wqi(255), WqiBand::Good);
    }

    #[test]
    fn wqi_bands() {
        assert_eq!(WqiBand::from_wqi(100), WqiBand::Good);
        assert_eq!(WqiBand::from_wqi(80), WqiBand::Good);
        assert_eq!(WqiBand::from_wqi(79), WqiBand::Moderate);
        assert_eq!(WqiBand::from_wqi(60), WqiBand::Moderate);
        assert_eq!(WqiBand::from_wqi(59), WqiBand::Unsafe);
        assert_eq!(WqiBand::from_wqi(0).tone(), Tone::Danger);
    }

    #[test]
    fn demo_metrics() {
        let metrics = SystemMetrics::from_divisions(&demo_divisions());
        assert_eq!(metrics.total_population, 7040);
        assert_eq!(metrics.average_wqi, 75);
        assert_eq!(metrics.running_pumps, 4);
        assert_eq!(metrics.total_complaints, 31);
        assert_eq!(metrics.total_leakages, 6);
        assert_eq!(metrics.average_pressure, 34.3);
    }

    #[test]
    fn empty_metrics_are_zero() {
        let metrics = SystemMetrics::from_divisions(&[]);
        assert_eq!(metrics.average_wqi, 0);
        assert_eq!(metrics.average_pressure, 0.0);
        assert_eq!(metrics.running_pumps, 0);
    }

    #[test]
    fn pump_toggles() {
        let mut board = PumpBoard::default();
        assert!(board.toggle_mode("rampur"));
        assert_eq!(board.pump("rampur").unwrap().mode, PumpMode::Manual);
        assert!(board.toggle_mode("rampur"));
        assert_eq!(board.pump("rampur").unwrap().mode, PumpMode::Auto);

        assert!(board.toggle_status("danapur"));
        assert_eq!(board.pump("danapur").unwrap().status, PumpStatus::Running);
        assert!(board.toggle_status("madhopur"));
        assert_eq!(board.pump("madhopur").unwrap().status, PumpStatus::Running);

        assert!(!board.toggle_status("atlantis"));
    }

    #[test]
    fn complaint_issues_resolve_to_catalog() {
        for c in citizen_complaints()
            .into_iter()
            .chain(recent_complaints())
            .chain(committee_complaints())
        {
            assert!(TrKey::ALL.contains(&c.issue));
            assert!(!c.place.is_empty());
        }
        assert_eq!(open_count(&recent_complaints()), 4);
    }

    #[test]
    fn division_names_follow_language() {
        let divisions = demo_divisions();
        assert_eq!(divisions[0].name(Language::En), "Rampur");
        assert_eq!(divisions[0].name(Language::Hi), "रामपुर");
        assert!(divisions[3].under_maintenance());
    }

    #[test]
    fn finances() {
        assert_eq!(demo_finances().monthly_surplus(), 13_400);
    }
}
