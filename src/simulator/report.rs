//! Simulation report generation.

use crate::core::format::format_number;
use crate::core::offline::OfflineDuration;
use serde::Serialize;

/// When a tier was first bought.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierUnlock {
    pub index: usize,
    pub name: String,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AscensionRecord {
    /// Simulated time of the Ascend
    pub at_seconds: f64,
    /// Time since the previous Ascend (or the start)
    pub cycle_seconds: f64,
    pub points: u64,
    /// Ascension power right after the Ascend
    pub ascension_power: f64,
}

/// Results of one simulated playthrough.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub simulated_seconds: f64,
    /// Whether the target number of Ascends was reached before the time limit
    pub reached_target: bool,
    pub total_clicks: u64,
    pub levels_purchased: u64,

    // Pacing
    pub tier_unlocks: Vec<TierUnlock>,
    pub ascensions: Vec<AscensionRecord>,

    // Final state
    pub final_resource: f64,
    pub final_rate: f64,
    pub final_levels: u64,
    pub ascension_points: u64,
    pub ascension_power: f64,
    pub transcendent_power: f64,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Simulated: {} ({})\n\n",
            OfflineDuration::from_seconds(self.simulated_seconds),
            if self.reached_target {
                "target reached"
            } else {
                "time limit"
            }
        ));

        report.push_str("── FINAL STATE ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Balance:             ${}\n",
            format_number(self.final_resource)
        ));
        report.push_str(&format!(
            "  Income:              ${}/s\n",
            format_number(self.final_rate)
        ));
        report.push_str(&format!("  Tier Levels:         {}\n", self.final_levels));
        report.push_str(&format!("  Levels Purchased:    {}\n", self.levels_purchased));
        report.push_str(&format!("  Clicks:              {}\n", self.total_clicks));
        report.push_str(&format!(
            "  Ascension Points:    {} (power x{:.2})\n",
            self.ascension_points, self.ascension_power
        ));
        report.push_str(&format!(
            "  Transcendent Power:  x{:.3}\n\n",
            self.transcendent_power
        ));

        report.push_str("── TIER UNLOCKS ─────────────────────────────────────────────────\n");
        if self.tier_unlocks.is_empty() {
            report.push_str("  (none)\n");
        }
        for unlock in &self.tier_unlocks {
            report.push_str(&format!(
                "  {:>2} {:<24} {}\n",
                unlock.index + 1,
                unlock.name,
                OfflineDuration::from_seconds(unlock.seconds)
            ));
        }
        report.push('\n');

        report.push_str("── ASCENSIONS ───────────────────────────────────────────────────\n");
        if self.ascensions.is_empty() {
            report.push_str("  (none)\n");
        }
        for (i, ascension) in self.ascensions.iter().enumerate() {
            report.push_str(&format!(
                "  #{:<3} at {:<16} cycle {:<16} +{} pts  power x{:.2}\n",
                i + 1,
                OfflineDuration::from_seconds(ascension.at_seconds).to_string(),
                OfflineDuration::from_seconds(ascension.cycle_seconds).to_string(),
                ascension.points,
                ascension.ascension_power
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SimReport {
        SimReport {
            simulated_seconds: 3661.0,
            reached_target: true,
            total_clicks: 10,
            levels_purchased: 3,
            tier_unlocks: vec![TierUnlock {
                index: 0,
                name: "Bottle Cap".to_string(),
                seconds: 10.0,
            }],
            ascensions: vec![AscensionRecord {
                at_seconds: 3600.0,
                cycle_seconds: 3600.0,
                points: 120,
                ascension_power: 2.2,
            }],
            final_resource: 12_345.0,
            final_rate: 1.5,
            final_levels: 0,
            ascension_points: 120,
            ascension_power: 2.2,
            transcendent_power: 1.0,
        }
    }

    #[test]
    fn test_text_report_sections() {
        let text = report().to_text();
        assert!(text.contains("Simulated: 0d 1h 1m 1s (target reached)"));
        assert!(text.contains("$12,345"));
        assert!(text.contains("Bottle Cap"));
        assert!(text.contains("+120 pts"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json()).unwrap();
        assert_eq!(json["ascensions"][0]["points"], 120);
        assert_eq!(json["tier_unlocks"][0]["name"], "Bottle Cap");
        assert_eq!(json["reached_target"], true);
    }
}
