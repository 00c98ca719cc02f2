//! Markdown answer templates / 回答模板
//!
//! Bold via `**`, bullets via `•`, numbered flow steps.

use crate::catalog::Catalog;
use crate::models::{Department, Sop};
use crate::search::SearchHit;

pub fn greeting(catalog: &Catalog) -> String {
    format!(
        "Hello! I'm your **{} SOP Assistant**.\n\n\
         I have access to all {} SOPs across {} departments. \
         Ask me anything about processes, workflows, responsibilities, or KPIs!\n\n\
         **Try asking:**\n\
         • \"How do we process broker commissions?\"\n\
         • \"What's the URRF process?\"\n\
         • \"Show me HR SOPs\"",
        catalog.organization(),
        catalog.sop_count(),
        catalog.departments().len(),
    )
}

pub fn help(catalog: &Catalog) -> String {
    format!(
        "I'm your intelligent SOP guide! Here's what I can help with:\n\n\
         **Find SOPs** - Search by topic, department, or process name\n\
         **Process Steps** - Get detailed workflow steps for any procedure\n\
         **Responsibilities** - Find out who's responsible for what\n\
         **KPIs** - Learn about performance targets and SLAs\n\
         **Departments** - Explore SOPs by department\n\n\
         Just ask me anything about {}'s processes!",
        catalog.organization(),
    )
}

pub fn department_list(catalog: &Catalog) -> String {
    let lines: Vec<String> = catalog
        .departments()
        .iter()
        .map(|d| format!("• **{}** ({}) - {} SOPs", d.name, d.id, d.sops.len()))
        .collect();

    format!(
        "Here are all {} departments at {}:\n\n{}\n\nWhich department would you like to explore?",
        catalog.departments().len(),
        catalog.organization(),
        lines.join("\n"),
    )
}

pub fn department_profile(dept: &Department) -> String {
    let sops: Vec<String> = dept.sops.iter().map(sop_line).collect();
    let kpis: Vec<String> = dept.kpis.iter().map(|k| format!("• {}: {}", k.label, k.value)).collect();

    format!(
        "**{} {}**\n\n{}\n\n**Process Owner:** {}\n\n**SOPs in this department:**\n{}\n\n**KPIs:**\n{}",
        dept.icon,
        dept.name,
        dept.description,
        dept.owner,
        sops.join("\n"),
        kpis.join("\n"),
    )
}

/// Top hit in full, up to three runners-up as "Related SOPs" / 最佳结果及相关SOP
pub fn sop_answer(top: &SearchHit<'_>, related: &[SearchHit<'_>]) -> String {
    let sop = top.sop;
    let steps: Vec<String> = sop
        .flow
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();

    let mut content = format!(
        "**{}: {}**\n\n**Purpose:** {}\n\n**Process Owner:** {}\n**Department:** {}\n**Version:** {}\n\n\
         **KPIs:**\n• Target: {}\n• Accuracy: {}\n• SLA: {}\n\n**Process Flow:**\n{}",
        sop.id,
        sop.title,
        sop.purpose,
        sop.owner,
        top.department.name,
        sop.version,
        sop.kpis.target,
        sop.kpis.accuracy,
        sop.kpis.sla,
        steps.join("\n"),
    );

    if !related.is_empty() {
        let lines: Vec<String> = related.iter().map(|h| sop_line(h.sop)).collect();
        content.push_str("\n\n---\n**Related SOPs:**\n");
        content.push_str(&lines.join("\n"));
    }

    content
}

pub fn no_match() -> String {
    "I couldn't find a specific SOP matching your query. Here are some suggestions:\n\n\
     • Try searching by department name (e.g., \"Sales\", \"Finance\", \"HR\")\n\
     • Search by process type (e.g., \"commission\", \"booking\", \"handover\")\n\
     • Ask about specific topics (e.g., \"RERA compliance\", \"payment collection\")\n\n\
     Would you like me to list all departments?"
        .to_string()
}

fn sop_line(sop: &Sop) -> String {
    format!("• {}: {}", sop.id, sop.title)
}
