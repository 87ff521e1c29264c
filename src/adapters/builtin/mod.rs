//! Built-in checklist catalog
//!
//! Static checklists for the domains every site inspects. Projects can
//! replace any of them from `.inspecta.toml`.

use crate::core::models::{Checklist, ChecklistItem, InspectionDomain};
use crate::core::ports::ChecklistRepository;

/// Repository serving only the built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinChecklists;

impl ChecklistRepository for BuiltinChecklists {
    fn find(&self, domain: &InspectionDomain) -> anyhow::Result<Option<Checklist>> {
        builtin_items(domain)
            .map(|items| Checklist::new(domain.clone(), items))
            .transpose()
            .map_err(Into::into)
    }

    fn domains(&self) -> anyhow::Result<Vec<InspectionDomain>> {
        Ok(InspectionDomain::BUILTIN.to_vec())
    }
}

/// Items of a built-in checklist, `None` for custom domains
#[must_use]
pub fn builtin_items(domain: &InspectionDomain) -> Option<Vec<ChecklistItem>> {
    match domain {
        InspectionDomain::Ammonia => Some(ammonia()),
        InspectionDomain::CompressedGas => Some(compressed_gas()),
        InspectionDomain::Ppe => Some(ppe()),
        InspectionDomain::Custom(_) => None,
    }
}

fn ammonia() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::critical("detectors", "Ammonia detectors functional and calibrated")
            .in_section("Detection"),
        ChecklistItem::critical("alarms", "Alarm horns and strobes tested").in_section("Detection"),
        ChecklistItem::critical("leaks", "No odor or visible leaks at valves and flanges")
            .in_section("Piping"),
        ChecklistItem::new("pipe-labels", "Piping labeled with contents and flow direction")
            .in_section("Piping"),
        ChecklistItem::new("relief-valves", "Relief valves within replacement date")
            .in_section("Piping"),
        ChecklistItem::new("oil-pots", "Oil pots drained and capped").in_section("Piping"),
        ChecklistItem::critical("emergency-shutoff", "Emergency shut-off accessible and labeled")
            .in_section("Machine room"),
        ChecklistItem::critical("ventilation", "Machine room ventilation operating")
            .in_section("Machine room"),
        ChecklistItem::new("housekeeping", "Machine room clear of storage and debris")
            .in_section("Machine room"),
        ChecklistItem::critical("eyewash", "Eyewash and safety shower tested")
            .in_section("Emergency"),
        ChecklistItem::new("respirators", "Emergency respirators staged and sealed")
            .in_section("Emergency"),
        ChecklistItem::new("signage", "Hazard and NFPA 704 signage posted").in_section("Emergency"),
    ]
}

fn compressed_gas() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::critical("secured", "Cylinders secured upright with chain or strap")
            .in_section("Storage"),
        ChecklistItem::critical("segregation", "Oxidizers separated from flammable gases")
            .in_section("Storage"),
        ChecklistItem::new("storage-area", "Storage area ventilated and away from heat sources")
            .in_section("Storage"),
        ChecklistItem::new("empties", "Empty cylinders marked and kept apart").in_section("Storage"),
        ChecklistItem::new("caps", "Valve caps fitted on cylinders not in use")
            .in_section("Cylinders"),
        ChecklistItem::new("labels", "Contents labels legible").in_section("Cylinders"),
        ChecklistItem::new("regulators", "Regulators and gauges undamaged").in_section("Equipment"),
        ChecklistItem::new("hoses", "Hoses and fittings free of cracks and leaks")
            .in_section("Equipment"),
        ChecklistItem::critical("flashback", "Flashback arrestors fitted on fuel-gas lines")
            .in_section("Equipment"),
        ChecklistItem::new("signage", "No-smoking and hazard signage posted").in_section("Area"),
    ]
}

fn ppe() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("hard-hat", "Hard hat shell and suspension intact").in_section("Head"),
        ChecklistItem::new("eye-protection", "Safety glasses or goggles undamaged")
            .in_section("Head"),
        ChecklistItem::new("hearing", "Hearing protection available and clean").in_section("Head"),
        ChecklistItem::critical("respirator-fit", "Respirator fit test current")
            .in_section("Respiratory"),
        ChecklistItem::critical("respirator-condition", "Respirator seals and cartridges serviceable")
            .in_section("Respiratory"),
        ChecklistItem::critical("harness", "Fall-arrest harness webbing and hardware intact")
            .in_section("Fall protection"),
        ChecklistItem::critical("lanyard", "Lanyard and shock pack not deployed")
            .in_section("Fall protection"),
        ChecklistItem::new("gloves", "Gloves suited to task and free of tears").in_section("Body"),
        ChecklistItem::new("footwear", "Safety footwear in good condition").in_section("Body"),
        ChecklistItem::new("hi-vis", "High-visibility garment worn").in_section("Body"),
        ChecklistItem::new("training", "Wearer training records current").in_section("Records"),
    ]
}
