pub mod point_evaluator;
