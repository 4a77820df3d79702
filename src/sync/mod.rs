pub mod bulk;
pub mod edit;
pub mod filter;
pub mod live;
pub mod selection;
pub mod view;

pub use bulk::PendingDelete;
pub use edit::{EditPhase, SaveRequest};
pub use filter::{group_by_year_and_class, Searchable};
pub use live::{Applied, LiveCollection, PollSchedule};
pub use view::CollectionView;
