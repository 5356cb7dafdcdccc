//! Rendering of the scheduling board.
//!
//! The board is the terminal counterpart of the original Gantt view:
//! aggregate counters on top, then one table row per study with its
//! collection window, quota progress, health status, and staffing
//! estimate.

use std::fmt;

use super::datetime::DisplayDate;
use crate::planner::{ScheduleBoard, ScheduleEntry};

impl fmt::Display for ScheduleBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Schedule ({})", DisplayDate(&self.as_of))?;
        writeln!(f)?;
        writeln!(f, "- Running studies: {}", self.running)?;
        writeln!(f, "- At risk: {}", self.at_risk)?;
        writeln!(f, "- Delayed: {}", self.delayed)?;
        writeln!(f, "- Interviewers on roster: {}", self.roster_size)?;
        writeln!(f)?;

        if self.entries.is_empty() {
            return writeln!(f, "No studies scheduled.");
        }

        writeln!(f, "| ID | Study | Window | Progress | Status | Staffing |")?;
        writeln!(f, "|---|---|---|---|---|---|")?;
        for entry in &self.entries {
            let study = &entry.study;
            writeln!(
                f,
                "| {} | {} | {} → {} | {:.0}% ({}/{}) | {} | {} required |",
                study.id,
                study.name,
                DisplayDate(&study.start),
                DisplayDate(&study.end),
                study.progress(),
                study.quota_completed,
                study.quota_target,
                entry.status.with_icon(),
                entry.required_interviewers
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let study = &self.study;
        writeln!(f, "# {}. {}", study.id, study.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Window: {} → {}",
            DisplayDate(&study.start),
            DisplayDate(&study.end)
        )?;
        writeln!(
            f,
            "- Progress: {:.0}% ({}/{})",
            study.progress(),
            study.quota_completed,
            study.quota_target
        )?;
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        if let Some(supervisor) = &study.supervisor {
            writeln!(f, "- Supervisor: {supervisor}")?;
        }
        if let Some(client) = &study.client {
            writeln!(f, "- Client: {client}")?;
        }
        if let Some(dependency) = &study.dependency {
            writeln!(f, "- Depends on: {dependency}")?;
        }
        writeln!(f, "- Staffing: {} interviewers required", self.required_interviewers)?;
        Ok(())
    }
}
