
#[cfg(test)]
mod courts_tests;

#[cfg(test)]
mod case_search_tests;
