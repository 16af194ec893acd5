mod params_test;
