use log::{debug, info};

use crate::entities::NestingResult;
use crate::error::ViewError;
use crate::export::{DEFAULT_FILE_PREFIX, SvgExport, export_svg};
use crate::grouping::{group_by_sheet, resolve_sheet_definition};
use crate::render::svg_util::SvgDrawOptions;
use crate::render::{SheetDrawing, render_sheet};
use crate::summary::Summary;

pub const NO_RESULT_MESSAGE: &str = "No result yet.";
pub const NOTHING_PLACED_MESSAGE: &str = "Nothing placed.";

/// Position of the controller over the used sheets of the installed result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationState {
    /// No result installed, or a result in which no sheet received a placement
    Empty,
    /// Index of the currently shown sheet among the used sheets
    Active(usize),
}

/// Content of the single drawing surface
#[derive(Clone, Debug)]
pub enum Surface {
    Placeholder(String),
    Drawing(SheetDrawing),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationControls {
    pub indicator: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub export_enabled: bool,
}

/// Snapshot of everything an external shell needs to present the controller.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub pagination: PaginationState,
    pub surface: Surface,
    pub controls: NavigationControls,
    pub summary: Option<Summary>,
}

impl ViewState {
    fn empty(message: &str, summary: Option<Summary>) -> Self {
        ViewState {
            pagination: PaginationState::Empty,
            surface: Surface::Placeholder(message.to_owned()),
            controls: NavigationControls {
                indicator: "Sheet 0 / 0".to_owned(),
                prev_enabled: false,
                next_enabled: false,
                export_enabled: false,
            },
            summary,
        }
    }

    pub fn drawing(&self) -> Option<&SheetDrawing> {
        match &self.surface {
            Surface::Drawing(d) => Some(d),
            Surface::Placeholder(_) => None,
        }
    }
}

type Subscriber = Box<dyn FnMut(&ViewState)>;

/// An installed result together with the sheets it actually uses.
struct InstalledResult {
    result: NestingResult,
    /// Sheet instance ids in first-seen order
    used_sheets: Vec<String>,
}

impl InstalledResult {
    fn new(result: NestingResult) -> Self {
        let used_sheets = group_by_sheet(&result.placements)
            .keys()
            .map(|id| id.to_string())
            .collect();
        InstalledResult {
            result,
            used_sheets,
        }
    }

    fn draw(&self, index: usize, options: &SvgDrawOptions) -> SheetDrawing {
        let instance_id = &self.used_sheets[index];
        let groups = group_by_sheet(&self.result.placements);
        let placements = groups
            .get(instance_id.as_str())
            .map_or(&[][..], |v| v.as_slice());
        match resolve_sheet_definition(instance_id, &self.result.sheet_definitions) {
            Some(sheet) => render_sheet(sheet, placements, options),
            None => SheetDrawing::InlineError(ViewError::MissingReference {
                instance_id: instance_id.clone(),
            }),
        }
    }
}

/// State machine over the ordered set of sheets which received at least one placement.
///
/// Exclusively owns the installed [`NestingResult`] and the drawing surface.
/// Every command runs to completion and fully replaces the surface content.
pub struct PaginationController {
    options: SvgDrawOptions,
    file_prefix: String,
    installed: Option<InstalledResult>,
    view: ViewState,
    subscribers: Vec<Subscriber>,
}

impl PaginationController {
    pub fn new(options: SvgDrawOptions, file_prefix: impl Into<String>) -> Self {
        PaginationController {
            options,
            file_prefix: file_prefix.into(),
            installed: None,
            view: ViewState::empty(NO_RESULT_MESSAGE, None),
            subscribers: vec![],
        }
    }

    /// Replaces the held result wholesale and shows its first used sheet, if any.
    pub fn install(&mut self, result: NestingResult) {
        let installed = InstalledResult::new(result);
        let summary = Summary::new(&installed.result, installed.used_sheets.len());
        info!(
            "installed nesting result: {} placements over {} sheets, {} unplaced",
            installed.result.placements.len(),
            installed.used_sheets.len(),
            installed.result.unplaced.len()
        );

        let first = match installed.used_sheets.is_empty() {
            true => None,
            false => Some(installed.draw(0, &self.options)),
        };
        self.installed = Some(installed);
        match first {
            Some(drawing) => {
                self.view.summary = Some(summary);
                self.show(0, drawing);
            }
            None => self.view = ViewState::empty(NOTHING_PLACED_MESSAGE, Some(summary)),
        }
        self.notify();
    }

    /// Moves to the next sheet, a no-op on the last one.
    pub fn next(&mut self) -> bool {
        match self.view.pagination {
            PaginationState::Active(i) => self.goto(i + 1),
            PaginationState::Empty => false,
        }
    }

    /// Moves to the previous sheet, a no-op on the first one.
    pub fn prev(&mut self) -> bool {
        match self.view.pagination {
            PaginationState::Active(i) if i > 0 => self.goto(i - 1),
            _ => false,
        }
    }

    /// Shows the sheet at `index`. Returns false and leaves the state untouched when out of range.
    pub fn goto(&mut self, index: usize) -> bool {
        let drawing = match &self.installed {
            Some(installed) if index < installed.used_sheets.len() => {
                installed.draw(index, &self.options)
            }
            _ => {
                debug!("goto({index}) ignored, {} sheets in use", self.sheet_count());
                return false;
            }
        };
        self.show(index, drawing);
        self.notify();
        true
    }

    /// Forces the empty state, regardless of the held result.
    pub fn reset(&mut self) {
        self.installed = None;
        self.view = ViewState::empty(NO_RESULT_MESSAGE, None);
        self.notify();
    }

    /// Serializes the currently rendered sheet.
    pub fn export(&self) -> Result<SvgExport, ViewError> {
        match self.view.pagination {
            PaginationState::Active(i) => export_svg(self.view.drawing(), i, &self.file_prefix),
            PaginationState::Empty => Err(ViewError::ExportWithNoDrawing),
        }
    }

    /// Registers a callback invoked with a snapshot of the view after every state change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn state(&self) -> PaginationState {
        self.view.pagination
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.view.pagination {
            PaginationState::Active(i) => Some(i),
            PaginationState::Empty => None,
        }
    }

    pub fn current_sheet_id(&self) -> Option<&str> {
        self.current_index()
            .and_then(|i| self.used_sheets().get(i))
            .map(|s| s.as_str())
    }

    pub fn used_sheets(&self) -> &[String] {
        self.installed
            .as_ref()
            .map_or(&[][..], |i| i.used_sheets.as_slice())
    }

    pub fn sheet_count(&self) -> usize {
        self.used_sheets().len()
    }

    pub fn result(&self) -> Option<&NestingResult> {
        self.installed.as_ref().map(|i| &i.result)
    }

    pub fn options(&self) -> &SvgDrawOptions {
        &self.options
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    fn show(&mut self, index: usize, drawing: SheetDrawing) {
        let n_sheets = self.sheet_count();
        self.view.controls = NavigationControls {
            indicator: format!("Sheet {} / {}", index + 1, n_sheets),
            prev_enabled: index > 0,
            next_enabled: index + 1 < n_sheets,
            export_enabled: drawing.document().is_some(),
        };
        self.view.pagination = PaginationState::Active(index);
        self.view.surface = Surface::Drawing(drawing);
    }

    fn notify(&mut self) {
        let view = &self.view;
        for subscriber in self.subscribers.iter_mut() {
            subscriber(view);
        }
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        PaginationController::new(SvgDrawOptions::default(), DEFAULT_FILE_PREFIX)
    }
}
