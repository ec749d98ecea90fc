use sprint::output::{format_human, HumanOutput};

#[test]
fn format_human_includes_sections() {
    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", "2");
    human.push_detail("[open][High] T1: Design the form (owner: alice)");
    human.push_warning("no handle for owner PHID-USER-ghost; shown as unassigned");
    human.push_next_step("sprint columns");

    let rendered = format_human(&human);
    assert!(rendered.contains("Tasks"));
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("- Total: 2"));
    assert!(rendered.contains("Details:"));
    assert!(rendered.contains("- [open][High] T1: Design the form (owner: alice)"));
    assert!(rendered.contains("Warnings:"));
    assert!(rendered.contains("Next steps:"));
    assert!(rendered.contains("- sprint columns"));
}

#[test]
fn format_human_omits_empty_sections() {
    let human = HumanOutput::new("Columns");
    let rendered = format_human(&human);
    assert_eq!(rendered, "Columns");
}
