// Page layout: static font metrics, block height estimation and pagination
// into fixed-height page bands for export.

pub mod font_metrics;
pub mod pagination;

pub use font_metrics::{a4_page_config, get_metrics, FontFamily, PageConfig};
pub use pagination::{block_height, paginate, BlockPlacement, PageBand, Pagination};
