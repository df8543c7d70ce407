mod placement;
mod result;
mod sheet;

#[doc(inline)]
pub use placement::Placement;
#[doc(inline)]
pub use placement::Slot;
#[doc(inline)]
pub use result::NestingResult;
#[doc(inline)]
pub use result::SheetStat;
#[doc(inline)]
pub use result::Statistics;
#[doc(inline)]
pub use result::UnplacedPart;
#[doc(inline)]
pub use sheet::SheetDefinition;
#[doc(inline)]
pub use sheet::SheetSource;
