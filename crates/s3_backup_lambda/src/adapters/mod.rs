pub mod object_copier;
