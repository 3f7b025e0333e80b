pub mod chunk_group_flags;
pub mod chunk_id;
pub mod output_asset;
pub mod path_data;
pub mod path_template;
pub mod raw_idx;
pub mod render_manifest;
