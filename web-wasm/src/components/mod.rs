pub mod material_table;
