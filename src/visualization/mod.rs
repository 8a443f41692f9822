pub mod orbsim_replay2d;
