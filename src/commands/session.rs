//! Session commands - run one inspection from start to submit

use anyhow::Context;
use log::debug;

use inspecta::config::GlobalConfig;
use inspecta::core::models::{CheckStatus, HeaderField, InspectionHeader, InspectionSession};
use inspecta::core::ports::{ChecklistRepository, RecordStore, SessionStore};
use inspecta::core::services::{SubmitError, commit_submission, finalize};
use inspecta::output::{OperationResult, OutputMode, ScoreReport, SubmitResult};

use super::{Workspace, parse_domain};
use crate::cli::SessionAction;

/// Dispatch a session subcommand
pub fn session_cmd(action: SessionAction, mode: OutputMode) -> anyhow::Result<()> {
    let ws = Workspace::open()?;

    match action {
        SessionAction::Start {
            domain,
            equipment,
            location,
            inspector,
            date,
            notes,
            force,
        } => {
            let header = InspectionHeader {
                equipment_id: equipment.unwrap_or_default(),
                location: location.unwrap_or_default(),
                inspector: inspector.unwrap_or_default(),
                date: match date {
                    Some(value) => parse_date(&value)?,
                    None => chrono::Local::now().format(DATE_FORMAT).to_string(),
                },
                notes,
            };
            start(&ws, &domain, header, force, mode)
        },
        SessionAction::Mark { id, status } => mark(&ws, &id, &status, mode),
        SessionAction::Unmark { id } => unmark(&ws, &id, mode),
        SessionAction::Set { field, value } => set_field(&ws, &field, value, mode),
        SessionAction::Show => show(&ws, mode),
        SessionAction::Submit => submit(&ws, mode),
        SessionAction::Discard => discard(&ws, mode),
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalize an inspection date, rejecting anything that is not YYYY-MM-DD
fn parse_date(value: &str) -> anyhow::Result<String> {
    let date = chrono::NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .with_context(|| format!("invalid date: {value}. Use YYYY-MM-DD"))?;
    Ok(date.format(DATE_FORMAT).to_string())
}

fn active(ws: &Workspace) -> anyhow::Result<InspectionSession> {
    match ws.sessions().load()? {
        Some(session) => Ok(session),
        None => anyhow::bail!("No active session. Run 'inspecta session start <domain>' first."),
    }
}

fn start(
    ws: &Workspace,
    domain: &str,
    mut header: InspectionHeader,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = ws.sessions();
    if let Some(existing) = store.load()?
        && !force
    {
        anyhow::bail!(
            "A {} session is already active. Submit or discard it, or use --force.",
            existing.domain
        );
    }

    let domain = parse_domain(domain)?;
    let checklist = ws.checklists.require(&domain)?;
    GlobalConfig::load().apply_defaults(&mut header);

    let session = InspectionSession::new(domain, header);
    store.save(&session)?;
    debug!("started {} session", session.domain);

    OperationResult::ok(format!(
        "Started {} inspection ({} items, {} critical).",
        session.domain,
        checklist.len(),
        checklist.critical_count()
    ))
    .render(mode);
    Ok(())
}

fn mark(ws: &Workspace, id: &str, status: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut session = active(ws)?;
    let checklist = ws.checklists.require(&session.domain)?;
    if !checklist.contains(id) {
        anyhow::bail!(
            "Unknown item '{id}' for {}. Run 'inspecta checklist list {}' to see item ids.",
            session.domain,
            session.domain
        );
    }

    let status: CheckStatus = status.parse()?;
    let previous = session.set_status(id, status);
    ws.sessions().save(&session)?;

    let stats = ws.checklists.policy(&session.domain)?.score(checklist.items(), &session.statuses).stats;
    let change = match previous {
        Some(old) if old != status => format!(" (was {old})"),
        _ => String::new(),
    };
    OperationResult::ok(format!(
        "{id}: {status}{change}  [{}/{} answered]",
        stats.completed, stats.total
    ))
    .render(mode);
    Ok(())
}

fn unmark(ws: &Workspace, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let mut session = active(ws)?;
    let message = match session.clear_status(id) {
        Some(old) => {
            ws.sessions().save(&session)?;
            format!("{id}: cleared (was {old})")
        },
        None => format!("{id}: no status recorded"),
    };
    OperationResult::ok(message).render(mode);
    Ok(())
}

fn set_field(ws: &Workspace, field: &str, value: String, mode: OutputMode) -> anyhow::Result<()> {
    let mut session = active(ws)?;
    let field: HeaderField = field.parse()?;
    let value = if field == HeaderField::Date { parse_date(&value)? } else { value };
    session.header.set(field, value);
    ws.sessions().save(&session)?;

    OperationResult::ok(format!("{field}: {}", session.header.get(field))).render(mode);
    Ok(())
}

fn show(ws: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let session = active(ws)?;
    let checklist = ws.checklists.require(&session.domain)?;
    let policy = ws.checklists.policy(&session.domain)?;

    ScoreReport::new(&checklist, &session.statuses, &policy)
        .with_header(&session.header)
        .render(mode);
    Ok(())
}

fn submit(ws: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let session = active(ws)?;
    let checklist = ws.checklists.require(&session.domain)?;
    let policy = ws.checklists.policy(&session.domain)?;
    let records = ws.records();

    let record = match finalize(session.clone(), &checklist, &policy, records.next_sequence()?) {
        Ok(record) => record,
        Err(e @ SubmitError::Incomplete { .. }) => {
            anyhow::bail!("{e}. Run 'inspecta session show' to see unanswered items.")
        },
        Err(e @ SubmitError::MissingFields(_)) => {
            anyhow::bail!("{e}. Set them with 'inspecta session set <field> <value>'.")
        },
        Err(e) => return Err(e.into()),
    };

    commit_submission(&records, &ws.sessions(), &session, &record)?;
    debug!("submitted {} ({})", record.id, record.result);

    SubmitResult { record }.render(mode);
    Ok(())
}

fn discard(ws: &Workspace, mode: OutputMode) -> anyhow::Result<()> {
    let session = active(ws)?;
    ws.sessions().clear()?;
    OperationResult::ok(format!("Discarded {} session.", session.domain)).render(mode);
    Ok(())
}
