pub mod sense_hat;
