pub mod music_task;
