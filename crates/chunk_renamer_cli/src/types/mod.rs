pub mod chunk_descriptor;
