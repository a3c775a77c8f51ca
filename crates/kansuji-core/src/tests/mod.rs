mod proptest_tree;
