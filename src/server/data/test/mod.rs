mod student;
