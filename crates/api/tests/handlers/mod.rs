mod experts_test;
mod middleware_test;
mod slots_test;
