pub mod controls;
pub mod delay_histogram;
pub mod destination_map;
pub mod distance_heatmap;
pub mod origin;
pub mod profile;
pub mod summary;
