#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use nestview::entities::SheetSource;
    use nestview::geometry::primitives::Point;
    use nestview::parts::{
        ManualSheet, PartRow, PartTable, ViewerHandle, ViewerRegistry, collect_sheet_definitions,
    };

    type DisposeLog = Rc<RefCell<Vec<String>>>;

    struct MockViewer {
        name: String,
        log: DisposeLog,
    }

    impl ViewerHandle for MockViewer {
        fn dispose(&mut self) {
            self.log.borrow_mut().push(self.name.clone());
        }
    }

    fn viewer(name: &str, log: &DisposeLog) -> Box<dyn ViewerHandle> {
        Box::new(MockViewer {
            name: name.to_owned(),
            log: log.clone(),
        })
    }

    fn row(file_name: &str) -> PartRow {
        PartRow {
            file_name: file_name.to_owned(),
            original_name: format!("{file_name}.step"),
            thickness: Some(2.0),
            profile: Some(vec![
                Point(0.0, 0.0),
                Point(600.0, 0.0),
                Point(600.0, 400.5),
                Point(0.0, 400.5),
            ]),
            quantity: 1,
            use_as_sheet: false,
            sheet_quantity: 1,
        }
    }

    #[test]
    fn attach_disposes_previous_viewer() {
        let log = DisposeLog::default();
        let mut registry = ViewerRegistry::new();
        registry.attach("row_1", viewer("first", &log));
        registry.attach("row_1", viewer("second", &log));

        assert_eq!(*log.borrow(), vec!["first"]);
        assert_eq!(registry.len(), 1);

        assert!(registry.dispose("row_1"));
        assert!(!registry.dispose("row_1"));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert!(registry.is_empty());
    }

    #[test]
    fn dropping_registry_disposes_all() {
        let log = DisposeLog::default();
        {
            let mut registry = ViewerRegistry::new();
            registry.attach("a", viewer("a", &log));
            registry.attach("b", viewer("b", &log));
        }
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn upsert_disposes_viewer_of_replaced_row() {
        let log = DisposeLog::default();
        let mut table = PartTable::new();
        assert!(table.upsert(row("upload-1")).is_none());
        assert!(table.attach_viewer("upload-1", viewer("v1", &log)));

        let mut updated = row("upload-1");
        updated.quantity = 5;
        let previous = table.upsert(updated);

        assert_eq!(previous.map(|r| r.quantity), Some(1));
        assert_eq!(*log.borrow(), vec!["v1"]);
        assert!(!table.viewers().contains("upload-1"));
        assert_eq!(table.get("upload-1").map(|r| r.quantity), Some(5));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_disposes_viewer_first() {
        let log = DisposeLog::default();
        let mut table = PartTable::new();
        table.upsert(row("upload-1"));
        table.upsert(row("upload-2"));
        table.attach_viewer("upload-2", viewer("v2", &log));

        assert!(table.remove("upload-2").is_some());
        assert_eq!(*log.borrow(), vec!["v2"]);
        assert!(table.remove("upload-2").is_none());
        assert_eq!(table.rows().map(|r| r.file_name.as_str()).collect::<Vec<_>>(), vec!["upload-1"]);
    }

    #[test]
    fn viewer_for_unknown_row_is_disposed_immediately() {
        let log = DisposeLog::default();
        let mut table = PartTable::new();
        assert!(!table.attach_viewer("nope", viewer("orphan", &log)));
        assert_eq!(*log.borrow(), vec!["orphan"]);
        assert!(table.viewers().is_empty());
    }

    #[test]
    fn collects_valid_manual_and_part_sheets() {
        let mut table = PartTable::new();
        let mut sheet_part = row("upload-7");
        sheet_part.use_as_sheet = true;
        sheet_part.sheet_quantity = 2;
        table.upsert(sheet_part);
        table.upsert(row("upload-8"));
        let mut no_profile = row("upload-9");
        no_profile.use_as_sheet = true;
        no_profile.profile = None;
        table.upsert(no_profile);

        let mut zero_width = ManualSheet::new(2);
        zero_width.width = 0.0;
        let mut nan_thickness = ManualSheet::new(3);
        nan_thickness.thickness = f64::NAN;
        let manual = vec![ManualSheet::new(1), zero_width, nan_thickness];

        let sheets = collect_sheet_definitions(&manual, &table);
        let ids: Vec<&str> = sheets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["manual_1", "part_upload-7"]);

        assert_eq!(sheets[0].width, 2500.0);
        assert_eq!(sheets[0].height, 1250.0);
        assert_eq!(sheets[1].source, SheetSource::Part);
        assert_eq!(sheets[1].width, 600.0);
        assert_eq!(sheets[1].height, 400.5);
        assert_eq!(sheets[1].quantity, 2);
        assert_eq!(sheets[1].original_name.as_deref(), Some("upload-7.step"));
    }
}
