//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.
//! Everything renders as markdown for the terminal renderer and MCP replies.

use std::fmt;

use crate::models::{
    ApprovalLine, ApprovalSettings, ApprovalStatus, ReceivedApprovalItem, SentApprovalItem, User,
};

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.username, self.role)
    }
}

impl fmt::Display for SentApprovalItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.document_type)?;
        writeln!(f, "- Date: {}", self.date)?;
        writeln!(f, "- Drafter: {}", self.drafter)?;
        writeln!(f, "- Approvers: {}", self.approvers.join(" → "))?;
        writeln!(f, "- Progress: {}", self.progress())?;
        if let Some(current) = self.current_approver() {
            writeln!(f, "- Waiting on: {current}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ReceivedApprovalItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.content,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.document_type)?;
        writeln!(f, "- Date: {}", self.date)?;
        writeln!(f, "- Drafter: {}", self.drafter)?;
        writeln!(f, "- Approver: {} (step {})", self.approver, self.step + 1)?;
        writeln!(f, "- Request: {}", self.sent_approval_id)?;
        writeln!(f)
    }
}

impl fmt::Display for ApprovalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}): {}",
            self.id,
            self.name,
            self.approvers.join(" → ")
        )
    }
}

impl fmt::Display for ApprovalSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Approval lines")?;
        writeln!(f)?;
        if self.lines.is_empty() {
            writeln!(f, "No approval lines configured.")?;
        }
        for line in self.lines.values() {
            write!(f, "{line}")?;
        }

        writeln!(f)?;
        writeln!(f, "## Documents")?;
        writeln!(f)?;
        if self.documents.is_empty() {
            writeln!(f, "No document settings configured.")?;
        }
        for (document_type, setting) in &self.documents {
            let line = setting.approval_line_id.as_deref().unwrap_or("-");
            if setting.use_approval {
                writeln!(f, "- {document_type}: approval required, line {line}")?;
            } else {
                writeln!(f, "- {document_type}: no approval, line {line}")?;
            }
        }
        Ok(())
    }
}
