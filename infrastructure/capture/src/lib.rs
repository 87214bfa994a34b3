pub mod file_capture;
