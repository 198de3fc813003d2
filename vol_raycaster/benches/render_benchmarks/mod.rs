/*
    vol_raycaster
    Author: Michal Majer
    Date: 2022-05-05
*/

//! Benchmark categories by threading

pub mod multi_thread;
pub mod single_thread;
