mod test_arm_model;
