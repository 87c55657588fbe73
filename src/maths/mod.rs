pub mod cordic;
