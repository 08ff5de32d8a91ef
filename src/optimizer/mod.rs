pub mod generation;
pub mod sampling;

pub use self::generation::{
    generate_config, generate_digraph_initial_layout, generate_final_layout,
    generate_variant_to_standard_finals, generate_zero_consonant_final_layout,
};
pub use self::sampling::{average_scores, par_average_scores};
