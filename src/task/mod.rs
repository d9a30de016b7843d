pub mod pendulum_measure;
