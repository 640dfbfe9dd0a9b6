pub mod commands {
    pub mod submit_check_in;
}
