#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use nestview::entities::{NestingResult, Placement, SheetDefinition, SheetSource, Slot, UnplacedPart};
    use nestview::error::ViewError;
    use nestview::export::{SVG_NAMESPACE, XML_DECLARATION};
    use nestview::geometry::primitives::Point;
    use nestview::pagination::{
        NO_RESULT_MESSAGE, NOTHING_PLACED_MESSAGE, PaginationController, PaginationState, Surface,
    };
    use nestview::render::SheetDrawing;
    use nestview::summary::Outcome;

    fn placement(part_id: &str, sheet_id: &str) -> Placement {
        Placement {
            part_id: part_id.to_owned(),
            part_instance_id: None,
            original_name: None,
            sheet_id: Some(sheet_id.to_owned()),
            rotation: 0.0,
            profile: Some(vec![
                Point(0.0, 0.0),
                Point(100.0, 0.0),
                Point(100.0, 50.0),
                Point(0.0, 50.0),
            ]),
            slot: Some(Slot {
                x: 10.0,
                y: 10.0,
                width: 110.0,
                height: 60.0,
            }),
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
            quantity: 3,
            original_name: None,
        }
    }

    fn three_sheet_result() -> NestingResult {
        NestingResult {
            placements: vec![
                placement("p1", "manual_1_inst_1"),
                placement("p2", "manual_1_inst_2"),
                placement("p3", "manual_1_inst_1"),
                placement("p4", "manual_1_inst_3"),
            ],
            sheet_definitions: vec![sheet("manual_1")],
            ..NestingResult::default()
        }
    }

    #[test]
    fn starts_empty_with_placeholder() {
        let controller = PaginationController::default();
        assert_eq!(controller.state(), PaginationState::Empty);
        assert!(matches!(&controller.view().surface, Surface::Placeholder(m) if m == NO_RESULT_MESSAGE));
        assert_eq!(controller.view().controls.indicator, "Sheet 0 / 0");
        assert_eq!(controller.export(), Err(ViewError::ExportWithNoDrawing));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        assert_eq!(controller.state(), PaginationState::Active(0));
        assert_eq!(controller.sheet_count(), 3);
        assert_eq!(
            controller.used_sheets(),
            &["manual_1_inst_1", "manual_1_inst_2", "manual_1_inst_3"]
        );

        assert!(controller.next());
        assert_eq!(controller.state(), PaginationState::Active(1));
        assert!(controller.next());
        assert_eq!(controller.state(), PaginationState::Active(2));
        assert!(!controller.next());
        assert_eq!(controller.state(), PaginationState::Active(2));

        assert!(controller.prev());
        assert!(controller.prev());
        assert!(!controller.prev());
        assert_eq!(controller.state(), PaginationState::Active(0));
        assert!(!controller.prev());
        assert_eq!(controller.state(), PaginationState::Active(0));
    }

    #[test]
    fn controls_follow_the_index() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());

        let controls = &controller.view().controls;
        assert_eq!(controls.indicator, "Sheet 1 / 3");
        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
        assert!(controls.export_enabled);

        controller.goto(2);
        let controls = &controller.view().controls;
        assert_eq!(controls.indicator, "Sheet 3 / 3");
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(controller.current_sheet_id(), Some("manual_1_inst_3"));
    }

    #[test]
    fn goto_out_of_range_is_ignored() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        controller.goto(1);
        assert!(!controller.goto(3));
        assert!(!controller.goto(usize::MAX));
        assert_eq!(controller.state(), PaginationState::Active(1));
    }

    #[test]
    fn renders_only_the_placements_of_the_current_sheet() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        match controller.view().drawing() {
            Some(SheetDrawing::Layout(layout)) => {
                let parts: Vec<&str> = layout.outlines.iter().map(|o| o.part_id.as_str()).collect();
                assert_eq!(parts, vec!["p1", "p3"]);
            }
            other => panic!("expected a layout, got {other:?}"),
        }
    }

    #[test]
    fn empty_result_disables_everything() {
        let mut controller = PaginationController::default();
        controller.install(NestingResult {
            unplaced: vec![UnplacedPart {
                part_id: "p1".to_owned(),
                name: None,
                quantity: Some(2),
            }],
            sheet_definitions: vec![sheet("manual_1")],
            ..NestingResult::default()
        });

        assert_eq!(controller.state(), PaginationState::Empty);
        assert!(matches!(&controller.view().surface, Surface::Placeholder(m) if m == NOTHING_PLACED_MESSAGE));
        assert!(!controller.next());
        assert!(!controller.prev());
        assert_eq!(controller.state(), PaginationState::Empty);
        assert_eq!(controller.export(), Err(ViewError::ExportWithNoDrawing));

        let controls = &controller.view().controls;
        assert!(!controls.prev_enabled && !controls.next_enabled && !controls.export_enabled);
        let summary = controller.view().summary.as_ref().unwrap();
        assert_eq!(summary.outcome, Outcome::Partial);
    }

    #[test]
    fn export_names_file_after_current_sheet() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        controller.next();

        let export = controller.export().unwrap();
        assert_eq!(export.file_name, "nesting_sheet_2.svg");
        assert!(export.content.starts_with(XML_DECLARATION));
        assert!(export.content.contains(&format!("xmlns=\"{SVG_NAMESPACE}\"")));
        assert!(export.content.contains("<svg"));
    }

    #[test]
    fn custom_prefix_is_used() {
        let mut controller = PaginationController::new(Default::default(), "job_42");
        controller.install(three_sheet_result());
        controller.goto(2);
        assert_eq!(controller.export().unwrap().file_name, "job_42_3.svg");
    }

    #[test]
    fn unresolved_sheet_shows_inline_error_and_keeps_navigation() {
        let mut result = three_sheet_result();
        result.placements.push(placement("p5", "ghost_inst_1"));
        let mut controller = PaginationController::default();
        controller.install(result);
        assert_eq!(controller.sheet_count(), 4);

        assert!(controller.goto(3));
        match controller.view().drawing().and_then(|d| d.error()) {
            Some(ViewError::MissingReference { instance_id }) => assert_eq!(instance_id, "ghost_inst_1"),
            other => panic!("expected MissingReference, got {other:?}"),
        }
        assert!(!controller.view().controls.export_enabled);
        assert!(controller.view().controls.prev_enabled);
        assert_eq!(controller.export(), Err(ViewError::ExportWithNoDrawing));

        assert!(controller.prev());
        assert!(controller.view().controls.export_enabled);
        assert!(controller.export().is_ok());
    }

    #[test]
    fn reset_forces_empty_state() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        controller.next();
        controller.reset();

        assert_eq!(controller.state(), PaginationState::Empty);
        assert!(controller.result().is_none());
        assert!(controller.view().summary.is_none());
        assert_eq!(controller.sheet_count(), 0);
        assert!(matches!(&controller.view().surface, Surface::Placeholder(m) if m == NO_RESULT_MESSAGE));
        assert!(!controller.next());
        assert_eq!(controller.export(), Err(ViewError::ExportWithNoDrawing));
    }

    #[test]
    fn goto_after_reset_keeps_placeholder() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        controller.reset();

        assert!(!controller.goto(0));
        assert!(controller.used_sheets().is_empty());
        assert!(controller.current_sheet_id().is_none());
        assert!(controller.view().drawing().is_none());
        assert!(matches!(&controller.view().surface, Surface::Placeholder(m) if m == NO_RESULT_MESSAGE));
    }

    #[test]
    fn install_replaces_previous_result() {
        let mut controller = PaginationController::default();
        controller.install(three_sheet_result());
        controller.goto(2);

        controller.install(NestingResult {
            placements: vec![placement("q1", "manual_9_inst_1")],
            sheet_definitions: vec![sheet("manual_9")],
            ..NestingResult::default()
        });
        assert_eq!(controller.state(), PaginationState::Active(0));
        assert_eq!(controller.sheet_count(), 1);
        assert_eq!(controller.view().controls.indicator, "Sheet 1 / 1");
        assert!(!controller.view().controls.next_enabled);
    }

    #[test]
    fn subscribers_see_every_state_change() {
        let seen: Rc<RefCell<Vec<PaginationState>>> = Rc::new(RefCell::new(vec![]));
        let mut controller = PaginationController::default();
        {
            let seen = seen.clone();
            controller.subscribe(move |view| seen.borrow_mut().push(view.pagination));
        }

        controller.install(three_sheet_result());
        controller.next();
        controller.goto(2);
        controller.next(); // clamped, no notification
        controller.goto(7); // out of range, no notification
        controller.reset();

        assert_eq!(
            *seen.borrow(),
            vec![
                PaginationState::Active(0),
                PaginationState::Active(1),
                PaginationState::Active(2),
                PaginationState::Empty,
            ]
        );
    }
}
