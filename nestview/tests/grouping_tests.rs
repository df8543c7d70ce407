#[cfg(test)]
mod tests {
    use nestview::entities::{Placement, SheetDefinition, SheetSource};
    use nestview::grouping::{definition_id, group_by_sheet, resolve_sheet_definition};
    use test_case::test_case;

    fn placement(part_id: &str, sheet_id: Option<&str>) -> Placement {
        Placement {
            part_id: part_id.to_owned(),
            part_instance_id: None,
            original_name: None,
            sheet_id: sheet_id.map(|s| s.to_owned()),
            rotation: 0.0,
            profile: None,
            slot: None,
            precise_outline: None,
        }
    }

    fn sheet(id: &str) -> SheetDefinition {
        SheetDefinition {
            id: id.to_owned(),
            width: 2500.0,
            height: 1250.0,
            thickness: Some(3.0),
            source: SheetSource::Manual,
            quantity: 1,
            original_name: None,
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let placements = vec![
            placement("p1", Some("A")),
            placement("p2", Some("B")),
            placement("p3", Some("A")),
        ];
        let groups = group_by_sheet(&placements);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(groups["A"].len(), 2);
        assert_eq!(groups["B"].len(), 1);
        assert_eq!(groups["A"][0].part_id, "p1");
        assert_eq!(groups["A"][1].part_id, "p3");
    }

    #[test]
    fn keys_are_not_sorted() {
        let placements = vec![
            placement("p1", Some("z_inst_1")),
            placement("p2", Some("a_inst_1")),
            placement("p3", Some("m_inst_1")),
        ];
        let groups = group_by_sheet(&placements);
        assert_eq!(
            groups.keys().copied().collect::<Vec<_>>(),
            vec!["z_inst_1", "a_inst_1", "m_inst_1"]
        );
    }

    #[test]
    fn placements_without_sheet_are_excluded() {
        let placements = vec![
            placement("p1", None),
            placement("p2", Some("A")),
            placement("p3", None),
        ];
        let groups = group_by_sheet(&placements);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.values().map(|v| v.len()).sum::<usize>(), 1);
    }

    #[test]
    fn no_placements_no_groups() {
        assert!(group_by_sheet(&[]).is_empty());
    }

    #[test_case("manual_7_inst_2", "manual_7"; "manual sheet")]
    #[test_case("part_upload-123_plate.step_inst_10", "part_upload-123_plate.step"; "part sheet")]
    #[test_case("sheet_inst_3_inst_1", "sheet_inst_3"; "only last suffix")]
    #[test_case("manual_7", "manual_7"; "no suffix")]
    #[test_case("manual_7_inst_", "manual_7_inst_"; "suffix without number")]
    fn strips_instance_suffix(instance_id: &str, expected: &str) {
        assert_eq!(definition_id(instance_id), expected);
    }

    #[test]
    fn resolves_instance_to_definition() {
        let defs = vec![sheet("manual_1"), sheet("manual_7"), sheet("manual_17")];
        let found = resolve_sheet_definition("manual_7_inst_2", &defs);
        assert_eq!(found.map(|d| d.id.as_str()), Some("manual_7"));

        let found = resolve_sheet_definition("manual_17_inst_1", &defs);
        assert_eq!(found.map(|d| d.id.as_str()), Some("manual_17"));
    }

    #[test]
    fn unknown_instance_resolves_to_none() {
        let _ = env_logger::builder().is_test(true).try_init();
        let defs = vec![sheet("manual_7")];
        assert!(resolve_sheet_definition("unknown_inst_1", &defs).is_none());
        assert!(resolve_sheet_definition("manual_7_inst_1", &[]).is_none());
    }
}
